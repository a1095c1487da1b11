use aws_lambda_events::apigw::{
    ApiGatewayCustomAuthorizerPolicy, ApiGatewayCustomAuthorizerRequest,
    ApiGatewayCustomAuthorizerResponse,
};
use aws_lambda_events::iam::{IamPolicyEffect, IamPolicyStatement};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lambda_runtime::{Error, LambdaEvent};

/// The single configured username/password pair, sourced from
/// `AUTH_CREDENTIALS` in `user=pass` format.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn parse(raw: &str) -> Option<Self> {
        let (username, password) = raw.split_once('=')?;
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Outcome of checking one bearer token against the configured pair.
#[derive(Debug, PartialEq)]
pub enum Decision {
    /// Token matched; carries the authenticated username.
    Allow(String),
    /// Token present but malformed or mismatched. Fails closed.
    Deny,
}

/// Decodes `Basic base64(username:password)` and compares it against the
/// configured pair. Any decode or parse failure is a deny.
pub fn check_token(token: &str, credentials: &Credentials) -> Decision {
    let encoded = match token.split_whitespace().nth(1) {
        Some(encoded) => encoded,
        None => return Decision::Deny,
    };

    let decoded = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(_) => return Decision::Deny,
    };
    let decoded = match String::from_utf8(decoded) {
        Ok(text) => text,
        Err(_) => return Decision::Deny,
    };

    match decoded.split_once(':') {
        Some((username, password))
            if username == credentials.username && password == credentials.password =>
        {
            Decision::Allow(username.to_string())
        }
        _ => Decision::Deny,
    }
}

fn policy(
    principal_id: &str,
    effect: IamPolicyEffect,
    resource: &str,
) -> ApiGatewayCustomAuthorizerResponse {
    ApiGatewayCustomAuthorizerResponse {
        principal_id: Some(principal_id.to_string()),
        policy_document: ApiGatewayCustomAuthorizerPolicy {
            version: Some("2012-10-17".to_string()),
            statement: vec![IamPolicyStatement {
                action: vec!["execute-api:Invoke".to_string()],
                effect,
                resource: vec![resource.to_string()],
                condition: None,
            }],
        },
        ..Default::default()
    }
}

/// Handles the API Gateway token authorizer event.
///
/// A missing token surfaces as an `Unauthorized` error (gateway 401); a
/// present but invalid token returns an explicit deny policy (gateway 403).
#[tracing::instrument(skip_all)]
pub async fn handler(
    credentials: &Credentials,
    event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>,
) -> Result<ApiGatewayCustomAuthorizerResponse, Error> {
    let method_arn = event.payload.method_arn.unwrap_or_default();

    let token = match event.payload.authorization_token {
        Some(token) if !token.is_empty() => token,
        _ => {
            tracing::warn!("no authorization token provided");
            return Err(Error::from("Unauthorized"));
        }
    };

    match check_token(&token, credentials) {
        Decision::Allow(username) => {
            tracing::info!(username = %username, "authenticated");
            Ok(policy(&username, IamPolicyEffect::Allow, &method_arn))
        }
        Decision::Deny => {
            tracing::warn!("invalid credentials");
            Ok(policy("unauthorized", IamPolicyEffect::Deny, &method_arn))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;

    fn credentials() -> Credentials {
        Credentials::parse("shopadmin=TEST_PASSWORD").unwrap()
    }

    fn basic_token(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
    }

    fn event(token: Option<&str>) -> LambdaEvent<ApiGatewayCustomAuthorizerRequest> {
        LambdaEvent::new(
            ApiGatewayCustomAuthorizerRequest {
                type_: Some("TOKEN".to_string()),
                authorization_token: token.map(|t| t.to_string()),
                method_arn: Some("arn:aws:execute-api:*/GET/import".to_string()),
            },
            Context::default(),
        )
    }

    #[test]
    fn parses_credentials_pair() {
        let parsed = Credentials::parse("user=pa=ss").unwrap();
        assert_eq!(parsed.username, "user");
        assert_eq!(parsed.password, "pa=ss");
        assert!(Credentials::parse("nodelimiter").is_none());
    }

    #[test]
    fn matching_token_is_allowed() {
        let token = basic_token("shopadmin", "TEST_PASSWORD");
        assert_eq!(
            check_token(&token, &credentials()),
            Decision::Allow("shopadmin".to_string())
        );
    }

    #[test]
    fn wrong_password_wrong_user_and_garbage_are_denied() {
        let creds = credentials();
        assert_eq!(
            check_token(&basic_token("shopadmin", "nope"), &creds),
            Decision::Deny
        );
        assert_eq!(
            check_token(&basic_token("intruder", "TEST_PASSWORD"), &creds),
            Decision::Deny
        );
        assert_eq!(check_token("Basic not-base64!!", &creds), Decision::Deny);
        assert_eq!(check_token("Basic", &creds), Decision::Deny);
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let result = handler(&credentials(), event(None)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn valid_token_yields_allow_policy_scoped_to_resource() {
        let token = basic_token("shopadmin", "TEST_PASSWORD");
        let response = handler(&credentials(), event(Some(&token))).await.unwrap();

        assert_eq!(response.principal_id.as_deref(), Some("shopadmin"));
        let statement = &response.policy_document.statement[0];
        assert_eq!(statement.effect, IamPolicyEffect::Allow);
        assert_eq!(statement.resource[0], "arn:aws:execute-api:*/GET/import");
    }

    #[tokio::test]
    async fn invalid_token_yields_deny_policy() {
        let token = basic_token("shopadmin", "nope");
        let response = handler(&credentials(), event(Some(&token))).await.unwrap();

        let statement = &response.policy_document.statement[0];
        assert_eq!(statement.effect, IamPolicyEffect::Deny);
    }
}
