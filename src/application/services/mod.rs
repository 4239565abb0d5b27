// src/application/services/mod.rs
pub mod authors;

use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            auth::AuthCommandService, blog::BlogCommandService, display::DisplayCommandService,
            footer_links::FooterLinkCommandService, showcase::ShowcaseCommandService,
            team::TeamCommandService, testimonials::TestimonialCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
        },
        queries::{
            auth::AuthQueryService, blog::BlogQueryService, dashboard::DashboardQueryService,
            footer_links::FooterLinkQueryService, showcase::ShowcaseQueryService,
            team::TeamQueryService, testimonials::TestimonialQueryService,
        },
    },
    domain::{
        blog::{BlogPostReadRepository, BlogPostWriteRepository},
        content::{DisplaySettingsRepository, SlugGenerator, SlugService},
        footer::FooterLinkRepository,
        showcase::ShowcaseAppRepository,
        team::TeamMemberRepository,
        testimonial::{TextTestimonialRepository, VideoTestimonialRepository},
        user::UserRepository,
    },
};

use authors::AuthorDirectory;

/// Every adapter the services need, gathered in one place so the binary and
/// the tests wire the same graph.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub blog_write: Arc<dyn BlogPostWriteRepository>,
    pub blog_read: Arc<dyn BlogPostReadRepository>,
    pub team: Arc<dyn TeamMemberRepository>,
    pub text_testimonials: Arc<dyn TextTestimonialRepository>,
    pub video_testimonials: Arc<dyn VideoTestimonialRepository>,
    pub footer_links: Arc<dyn FooterLinkRepository>,
    pub showcase: Arc<dyn ShowcaseAppRepository>,
    pub display: Arc<dyn DisplaySettingsRepository>,
}

#[derive(Clone)]
pub struct SecurityPorts {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub session_revocation_store: Arc<dyn SessionRevocationStore>,
}

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub auth_queries: Arc<AuthQueryService>,
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub team_commands: Arc<TeamCommandService>,
    pub team_queries: Arc<TeamQueryService>,
    pub testimonial_commands: Arc<TestimonialCommandService>,
    pub testimonial_queries: Arc<TestimonialQueryService>,
    pub footer_link_commands: Arc<FooterLinkCommandService>,
    pub footer_link_queries: Arc<FooterLinkQueryService>,
    pub showcase_commands: Arc<ShowcaseCommandService>,
    pub showcase_queries: Arc<ShowcaseQueryService>,
    pub display_commands: Arc<DisplayCommandService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        security: SecurityPorts,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slugger));
        let authors = AuthorDirectory::new(Arc::clone(&repos.team));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&repos.users),
            security.clone(),
            Arc::clone(&clock),
        ));
        let auth_queries = Arc::new(AuthQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&repos.blog_write),
            Arc::clone(&repos.blog_read),
            authors.clone(),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&repos.blog_read),
            authors,
        ));

        let team_commands = Arc::new(TeamCommandService::new(
            Arc::clone(&repos.team),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let team_queries = Arc::new(TeamQueryService::new(Arc::clone(&repos.team)));

        let testimonial_commands = Arc::new(TestimonialCommandService::new(
            Arc::clone(&repos.text_testimonials),
            Arc::clone(&repos.video_testimonials),
            Arc::clone(&clock),
        ));
        let testimonial_queries = Arc::new(TestimonialQueryService::new(
            Arc::clone(&repos.text_testimonials),
            Arc::clone(&repos.video_testimonials),
        ));

        let footer_link_commands = Arc::new(FooterLinkCommandService::new(
            Arc::clone(&repos.footer_links),
            Arc::clone(&clock),
        ));
        let footer_link_queries =
            Arc::new(FooterLinkQueryService::new(Arc::clone(&repos.footer_links)));

        let showcase_commands = Arc::new(ShowcaseCommandService::new(
            Arc::clone(&repos.showcase),
            Arc::clone(&clock),
        ));
        let showcase_queries = Arc::new(ShowcaseQueryService::new(Arc::clone(&repos.showcase)));

        let display_commands = Arc::new(DisplayCommandService::new(Arc::clone(&repos.display)));
        let dashboard_queries = Arc::new(DashboardQueryService::new(
            Arc::clone(&repos.team),
            Arc::clone(&repos.blog_read),
            Arc::clone(&repos.text_testimonials),
            Arc::clone(&repos.video_testimonials),
        ));

        Self {
            auth_commands,
            auth_queries,
            blog_commands,
            blog_queries,
            team_commands,
            team_queries,
            testimonial_commands,
            testimonial_queries,
            footer_link_commands,
            footer_link_queries,
            showcase_commands,
            showcase_queries,
            display_commands,
            dashboard_queries,
            token_manager: security.token_manager,
            session_revocation_store: security.session_revocation_store,
        }
    }

    /// Resolve a raw bearer token into the current admin session.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        if self
            .session_revocation_store
            .is_revoked(&user.session_id)
            .await?
        {
            return Err(ApplicationError::unauthorized("session revoked"));
        }
        Ok(user)
    }
}
