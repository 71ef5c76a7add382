use async_trait::async_trait;
use mockall::mock;
use timetext_core::{errors::TextResult, models::availability::AvailabilityRequest};

use crate::availability::TextGenerator;

// Mock text generator for testing
mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, request: &AvailabilityRequest) -> TextResult<String>;
    }
}
