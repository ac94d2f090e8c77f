use crate::utils::rail_client::RailClient;

#[derive(Clone)]
pub struct AppState {
    pub rail_client: RailClient,
}
