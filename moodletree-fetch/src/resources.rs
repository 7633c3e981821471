//! Typed wrappers around the REST functions.
//!
//! Each call builds its parameters with [`api_params`], goes through
//! [`request_data`] for envelope validation, then deserializes the body into
//! a core type. Callers never look at error fields themselves.

use tracing::{debug, instrument};

use moodletree_core::{Course, CourseContents, SiteInfo, Token, UserId};

use crate::config::ServiceConfig;
use crate::envelope::{api_params, parse_payload, request_data};
use crate::error::FetchError;
use crate::transport::Transport;

/// Client for the site info, enrolment, and course contents functions.
#[derive(Clone, Copy)]
pub struct ResourceFetcher<'a> {
    config: &'a ServiceConfig,
    transport: &'a dyn Transport,
}

impl<'a> ResourceFetcher<'a> {
    /// Creates a fetcher for the configured site.
    pub fn new(config: &'a ServiceConfig, transport: &'a dyn Transport) -> Self {
        Self { config, transport }
    }

    /// Returns the config this fetcher was built with.
    pub fn config(&self) -> &'a ServiceConfig {
        self.config
    }

    /// Fetches site info for the token owner.
    ///
    /// # Errors
    ///
    /// Returns a transport, service, or shape error.
    #[instrument(skip_all)]
    pub async fn get_user_info(&self, token: &Token) -> Result<SiteInfo, FetchError> {
        let params = api_params(
            token,
            &self.config.functions.site_info,
            Vec::<(String, String)>::new(),
        );
        let body = request_data(self.transport, &self.config.api_url(), &params).await?;
        parse_payload(body, "site info")
    }

    /// Returns the id of the token owner.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Service`] if site info carries no user id.
    pub async fn get_user_id(&self, token: &Token) -> Result<UserId, FetchError> {
        let info = self.get_user_info(token).await?;
        let user_id = info
            .user_id()
            .ok_or_else(|| FetchError::service("no userid in site info"))?;

        debug!(user_id = %user_id, "Resolved user id");
        Ok(user_id)
    }

    /// Lists courses the user is enrolled in, in service order.
    ///
    /// # Errors
    ///
    /// Returns a transport, service, or shape error.
    #[instrument(skip(self, token))]
    pub async fn get_course_list(
        &self,
        token: &Token,
        user_id: UserId,
    ) -> Result<Vec<Course>, FetchError> {
        let params = api_params(
            token,
            &self.config.functions.user_courses,
            [("userid", user_id.to_string())],
        );
        let body = request_data(self.transport, &self.config.api_url(), &params).await?;
        let courses: Vec<Course> = parse_payload(body, "course list")?;

        debug!(count = courses.len(), "Fetched course list");
        Ok(courses)
    }

    /// Fetches the raw sections of a course.
    ///
    /// # Errors
    ///
    /// Returns a transport, service, or shape error.
    #[instrument(skip(self, token))]
    pub async fn get_course_contents(
        &self,
        token: &Token,
        course_id: u64,
    ) -> Result<CourseContents, FetchError> {
        let params = api_params(
            token,
            &self.config.functions.course_contents,
            [("courseid", course_id.to_string())],
        );
        let body = request_data(self.transport, &self.config.api_url(), &params).await?;
        let contents: CourseContents = parse_payload(body, "course contents")?;

        debug!(sections = contents.sections().len(), "Fetched course contents");
        Ok(contents)
    }
}
