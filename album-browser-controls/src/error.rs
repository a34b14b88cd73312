use snafu::prelude::*;

use crate::navigation::Route;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Cannot navigate from {from} to {to}"))]
    InvalidNavigation { from: Route, to: Route },
}

/// The display string a screen shows for a failed fetch.
pub fn user_message(error: &album_browser_client::Error) -> String {
    use album_browser_client::Error as ClientError;

    match error {
        ClientError::NotFound { .. } => "Not found".to_string(),
        ClientError::Network { .. } => "Unable to reach the catalog service".to_string(),
        ClientError::Http { status, .. } => {
            format!("Server responded with status {}", status.as_u16())
        }
        ClientError::Decode { .. } => "Received malformed album data".to_string(),
        ClientError::InvalidUrl { .. } => "Invalid catalog address".to_string(),
    }
}
