//! Job endpoint addressing

/// HTTP Basic credential pair
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

/// Normalized address of a buildable job
///
/// Trailing slashes are stripped at construction so the request paths can be
/// appended verbatim. Immutable afterwards; owned by the [`JobClient`].
///
/// [`JobClient`]: crate::JobClient
#[derive(Debug, Clone)]
pub struct JobEndpoint {
    url: String,
    credentials: Option<Credentials>,
}

impl JobEndpoint {
    /// Create an endpoint for a job base URL
    ///
    /// # Example
    /// ```
    /// use gantry_client::JobEndpoint;
    ///
    /// let endpoint = JobEndpoint::new("https://ci.example.net/job/foo/");
    /// assert_eq!(endpoint.url(), "https://ci.example.net/job/foo");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    /// Attach a Basic credential pair
    ///
    /// Credentials apply to every request the client sends; without them the
    /// requests go out unauthenticated.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            secret: secret.into(),
        });
        self
    }

    /// The normalized base URL of the job
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured credential pair, if any
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}
