use crate::api::{ApiClient, ApiError, RawCalendarItem};
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct CalendarRepository {
    client: Rc<ApiClient>,
}

impl Default for CalendarRepository {
    fn default() -> Self {
        Self::new(ApiClient::new())
    }
}

impl CalendarRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<RawCalendarItem>, ApiError> {
        self.client.get_holidays_events().await
    }
}
