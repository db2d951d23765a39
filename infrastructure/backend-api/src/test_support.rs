use std::sync::Arc;

use mockall::mock;
use url::Url;

use business::domain::logger::Logger;

use crate::client::{BackendClient, BackendClientConfig};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn backend_client(uri: &str, bearer_token: Option<&str>) -> Arc<BackendClient> {
    let mut config = BackendClientConfig::new(Url::parse(uri).unwrap());
    config.bearer_token = bearer_token.map(str::to_string);
    Arc::new(BackendClient::new(config).unwrap())
}
