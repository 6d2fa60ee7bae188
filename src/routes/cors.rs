use crate::error::ServerError;
use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// Which origins may call the service from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, method and header, with credentials
    Permissive,
    /// Only the listed origins, with credentials
    AllowList(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Parse a comma separated origin list. Empty or `*` anywhere in the list means any origin.
    pub fn from_origins(origins: Option<&str>) -> Result<Self, ServerError> {
        let origins: Vec<&str> = origins
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect();

        if origins.is_empty() || origins.contains(&"*") {
            return Ok(Self::Permissive);
        }

        origins
            .into_iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| ServerError::InvalidCorsOrigin {
                    origin: o.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::AllowList)
    }

    pub fn is_permissive(&self) -> bool {
        matches!(self, Self::Permissive)
    }

    /// Wrap every route and the fallback of `router` with this policy.
    /// `OPTIONS` requests are answered here and never reach a handler.
    pub fn apply(&self, router: Router) -> Router {
        match self {
            Self::Permissive => router
                // tower-http refuses wildcards combined with credentials, so the
                // credentials header is set on the way out instead
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                )),
            Self::AllowList(origins) => router.layer(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins.iter().cloned()))
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_wildcard_is_permissive() {
        assert!(CorsPolicy::from_origins(None).unwrap().is_permissive());
        assert!(CorsPolicy::from_origins(Some("")).unwrap().is_permissive());
        assert!(CorsPolicy::from_origins(Some(" * ")).unwrap().is_permissive());
        assert!(CorsPolicy::from_origins(Some("https://a.example,*"))
            .unwrap()
            .is_permissive());
    }

    #[test]
    fn origin_list_is_trimmed() {
        let policy =
            CorsPolicy::from_origins(Some("https://a.example, https://b.example ,")).unwrap();
        assert_eq!(
            policy,
            CorsPolicy::AllowList(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        let err = CorsPolicy::from_origins(Some("https://a.example,bad\u{7f}origin")).unwrap_err();
        match err {
            ServerError::InvalidCorsOrigin { origin } => assert_eq!(origin, "bad\u{7f}origin"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
