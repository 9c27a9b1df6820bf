use super::*;

#[test]
fn status_401_maps_to_unauthorized_regardless_of_body() {
    assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
    assert_eq!(
        ApiError::from_response(401, r#"{"message":"token expired"}"#),
        ApiError::Unauthorized
    );
}

#[test]
fn json_envelope_message_is_extracted() {
    assert_eq!(
        ApiError::from_response(400, r#"{"message":"invalid credentials"}"#),
        ApiError::Server {
            status: 400,
            message: "invalid credentials".to_owned(),
        }
    );
}

#[test]
fn plain_text_body_is_used_verbatim() {
    assert_eq!(
        ApiError::from_response(500, "database unavailable\n"),
        ApiError::Server {
            status: 500,
            message: "database unavailable".to_owned(),
        }
    );
}

#[test]
fn empty_body_falls_back_to_the_status() {
    assert_eq!(
        ApiError::from_response(502, ""),
        ApiError::Server {
            status: 502,
            message: "request failed: 502".to_owned(),
        }
    );
}

#[test]
fn display_formats_read_as_user_messages() {
    assert_eq!(ApiError::Unauthorized.to_string(), "not signed in");
    assert_eq!(
        ApiError::Server {
            status: 400,
            message: "invalid credentials".to_owned(),
        }
        .to_string(),
        "invalid credentials"
    );
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
}
