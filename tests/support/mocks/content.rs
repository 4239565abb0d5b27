// tests/support/mocks/content.rs
//! One in-memory store behind every content repository trait, so writes made
//! through the display repository are visible to the collection reads.
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use showroom_cms::domain::{
    blog::{
        BlogListOrder, BlogPost, BlogPostFilter, BlogPostId, BlogPostReadRepository,
        BlogPostUpdate, BlogPostWriteRepository, NewBlogPost,
    },
    content::{
        Collection, DisplayOrdered, DisplaySettings, DisplaySettingsRepository, OrderIndex, Slug,
        sort_for_display,
    },
    errors::{DomainError, DomainResult},
    footer::{FooterLink, FooterLinkId, FooterLinkRepository, FooterLinkUpdate, NewFooterLink},
    showcase::{
        NewShowcaseApp, ShowcaseApp, ShowcaseAppId, ShowcaseAppRepository, ShowcaseAppUpdate,
    },
    team::{
        NewTeamMember, TeamMember, TeamMemberFilter, TeamMemberId, TeamMemberRepository,
        TeamMemberUpdate,
    },
    testimonial::{
        NewTextTestimonial, NewVideoTestimonial, TextTestimonial, TextTestimonialId,
        TextTestimonialRepository, TextTestimonialUpdate, VideoTestimonial, VideoTestimonialId,
        VideoTestimonialRepository, VideoTestimonialUpdate,
    },
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    posts: Vec<BlogPost>,
    team: Vec<TeamMember>,
    text: Vec<TextTestimonial>,
    video: Vec<VideoTestimonial>,
    footer: Vec<FooterLink>,
    showcase: Vec<ShowcaseApp>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct InMemoryContent {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.lock()
            .posts
            .iter()
            .find(|p| p.slug.as_str() == slug)
            .cloned()
    }

    pub fn team_member(&self, id: i64) -> Option<TeamMember> {
        self.lock()
            .team
            .iter()
            .find(|m| i64::from(m.id) == id)
            .cloned()
    }
}

/// Access to the `visible` / `order_index` pair of any ordered record.
trait Displayed: DisplayOrdered {
    fn is_visible(&self) -> bool;
    fn display_mut(&mut self) -> (&mut bool, &mut OrderIndex);
}

macro_rules! displayed {
    ($($ty:ty),*) => {
        $(impl Displayed for $ty {
            fn is_visible(&self) -> bool {
                self.visible
            }

            fn display_mut(&mut self) -> (&mut bool, &mut OrderIndex) {
                (&mut self.visible, &mut self.order_index)
            }
        })*
    };
}

displayed!(TeamMember, TextTestimonial, VideoTestimonial, FooterLink, ShowcaseApp);

fn write_display<T: Displayed>(
    rows: &mut [T],
    collection: Collection,
    id: i64,
    write: impl FnOnce(&mut bool, &mut OrderIndex),
) -> DomainResult<DisplaySettings> {
    let row = rows
        .iter_mut()
        .find(|r| r.record_id() == id)
        .ok_or_else(|| DomainError::not_found(collection.label()))?;
    let (visible, order_index) = row.display_mut();
    write(visible, order_index);
    Ok(DisplaySettings {
        collection,
        id,
        visible: *visible,
        order_index: *order_index,
    })
}

fn with_display(
    tables: &mut Tables,
    collection: Collection,
    id: i64,
    write: impl FnOnce(&mut bool, &mut OrderIndex),
) -> DomainResult<DisplaySettings> {
    match collection {
        Collection::TeamMembers => write_display(&mut tables.team, collection, id, write),
        Collection::TextTestimonials => write_display(&mut tables.text, collection, id, write),
        Collection::VideoTestimonials => write_display(&mut tables.video, collection, id, write),
        Collection::FooterLinks => write_display(&mut tables.footer, collection, id, write),
        Collection::ShowcaseApps => write_display(&mut tables.showcase, collection, id, write),
    }
}

fn visible_rows<T: Displayed + Clone>(rows: &[T], include_hidden: bool) -> Vec<T> {
    let mut rows: Vec<T> = rows
        .iter()
        .filter(|r| include_hidden || r.is_visible())
        .cloned()
        .collect();
    sort_for_display(&mut rows);
    rows
}

fn remove_by<T>(rows: &mut Vec<T>, what: &str, matches: impl Fn(&T) -> bool) -> DomainResult<()> {
    let before = rows.len();
    rows.retain(|r| !matches(r));
    if rows.len() == before {
        Err(DomainError::not_found(what))
    } else {
        Ok(())
    }
}

fn merge<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

fn ensure_unique_slug<'a>(
    mut existing: impl Iterator<Item = (i64, &'a Slug)>,
    slug: &Slug,
    except: Option<i64>,
) -> DomainResult<()> {
    if existing.any(|(id, s)| s == slug && Some(id) != except) {
        Err(DomainError::slug_taken())
    } else {
        Ok(())
    }
}

/* ---------------------------------- blog ---------------------------------- */

#[async_trait]
impl BlogPostWriteRepository for InMemoryContent {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let mut tables = self.lock();
        ensure_unique_slug(
            tables.posts.iter().map(|p| (i64::from(p.id), &p.slug)),
            &post.slug,
            None,
        )?;
        if let Some(author) = post.author_id {
            if !tables.team.iter().any(|m| m.id == author) {
                return Err(DomainError::Validation("author does not exist".into()));
            }
        }
        let id = BlogPostId(tables.next_id());
        let created = BlogPost {
            id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            featured_image: post.featured_image,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            publish_state: post.publish_state,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        tables.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let mut tables = self.lock();
        if let Some(slug) = &update.slug {
            ensure_unique_slug(
                tables.posts.iter().map(|p| (i64::from(p.id), &p.slug)),
                slug,
                Some(update.id.into()),
            )?;
        }
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::not_found("blog post"))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: BlogPostId) -> DomainResult<()> {
        remove_by(&mut self.lock().posts, "blog post", |p| p.id == id)
    }
}

#[async_trait]
impl BlogPostReadRepository for InMemoryContent {
    async fn find_by_id(&self, id: BlogPostId) -> DomainResult<Option<BlogPost>> {
        Ok(self.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        Ok(self.post_by_slug(slug.as_str()))
    }

    async fn list(&self, filter: &BlogPostFilter) -> DomainResult<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self
            .lock()
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        match filter.order {
            BlogListOrder::Newest => posts.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
            BlogListOrder::RecentlyPublished => {
                posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
            }
        }
        Ok(posts)
    }

    async fn count_published(&self) -> DomainResult<u64> {
        Ok(self.lock().posts.iter().filter(|p| p.is_published()).count() as u64)
    }
}

/* ---------------------------------- team ---------------------------------- */

#[async_trait]
impl TeamMemberRepository for InMemoryContent {
    async fn insert(&self, member: NewTeamMember) -> DomainResult<TeamMember> {
        let mut tables = self.lock();
        ensure_unique_slug(
            tables.team.iter().map(|m| (i64::from(m.id), &m.slug)),
            &member.slug,
            None,
        )?;
        let id = TeamMemberId(tables.next_id());
        let created = TeamMember {
            id,
            full_name: member.full_name,
            slug: member.slug,
            job_title: member.job_title,
            department: member.department,
            short_bio: member.short_bio,
            bio: member.bio,
            location: member.location,
            email: member.email,
            phone: member.phone,
            photo_url: member.photo_url,
            is_featured: member.is_featured,
            social_links: member.social_links,
            visible: member.visible,
            order_index: member.order_index,
            created_at: member.created_at,
            updated_at: member.created_at,
        };
        tables.team.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TeamMemberUpdate) -> DomainResult<TeamMember> {
        let mut tables = self.lock();
        if let Some(slug) = &update.slug {
            ensure_unique_slug(
                tables.team.iter().map(|m| (i64::from(m.id), &m.slug)),
                slug,
                Some(update.id.into()),
            )?;
        }
        let member = tables
            .team
            .iter_mut()
            .find(|m| m.id == update.id)
            .ok_or_else(|| DomainError::not_found("team member"))?;
        update.apply_to(member);
        Ok(member.clone())
    }

    async fn delete(&self, id: TeamMemberId) -> DomainResult<()> {
        let mut tables = self.lock();
        remove_by(&mut tables.team, "team member", |m| m.id == id)?;
        for post in tables.posts.iter_mut().filter(|p| p.author_id == Some(id)) {
            post.author_id = None;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TeamMemberId) -> DomainResult<Option<TeamMember>> {
        Ok(self.team_member(id.into()))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<TeamMember>> {
        Ok(self.lock().team.iter().find(|m| &m.slug == slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[TeamMemberId]) -> DomainResult<Vec<TeamMember>> {
        Ok(self
            .lock()
            .team
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>> {
        let mut members: Vec<TeamMember> = self
            .lock()
            .team
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        sort_for_display(&mut members);
        Ok(members)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().team.len() as u64)
    }
}

/* ------------------------------ testimonials ------------------------------ */

#[async_trait]
impl TextTestimonialRepository for InMemoryContent {
    async fn insert(&self, t: NewTextTestimonial) -> DomainResult<TextTestimonial> {
        let mut tables = self.lock();
        let created = TextTestimonial {
            id: TextTestimonialId(tables.next_id()),
            client_name: t.client_name,
            client_company: t.client_company,
            client_position: t.client_position,
            testimonial_text: t.testimonial_text,
            rating: t.rating,
            visible: t.visible,
            order_index: t.order_index,
            created_at: t.created_at,
            updated_at: t.created_at,
        };
        tables.text.push(created.clone());
        Ok(created)
    }

    async fn update(&self, u: TextTestimonialUpdate) -> DomainResult<TextTestimonial> {
        let mut tables = self.lock();
        let row = tables
            .text
            .iter_mut()
            .find(|r| r.id == u.id)
            .ok_or_else(|| DomainError::not_found("text testimonial"))?;
        merge(&mut row.client_name, u.client_name.as_ref());
        merge(&mut row.client_company, u.client_company.as_ref());
        merge(&mut row.client_position, u.client_position.as_ref());
        merge(&mut row.testimonial_text, u.testimonial_text.as_ref());
        merge(&mut row.rating, u.rating.as_ref());
        merge(&mut row.visible, u.visible.as_ref());
        merge(&mut row.order_index, u.order_index.as_ref());
        row.updated_at = u.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: TextTestimonialId) -> DomainResult<()> {
        remove_by(&mut self.lock().text, "text testimonial", |r| r.id == id)
    }

    async fn find_by_id(&self, id: TextTestimonialId) -> DomainResult<Option<TextTestimonial>> {
        Ok(self.lock().text.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<TextTestimonial>> {
        Ok(visible_rows(&self.lock().text, include_hidden))
    }

    async fn count_visible(&self) -> DomainResult<u64> {
        Ok(self.lock().text.iter().filter(|r| r.visible).count() as u64)
    }
}

#[async_trait]
impl VideoTestimonialRepository for InMemoryContent {
    async fn insert(&self, t: NewVideoTestimonial) -> DomainResult<VideoTestimonial> {
        let mut tables = self.lock();
        let created = VideoTestimonial {
            id: VideoTestimonialId(tables.next_id()),
            client_name: t.client_name,
            client_company: t.client_company,
            video_url: t.video_url,
            thumbnail_url: t.thumbnail_url,
            visible: t.visible,
            order_index: t.order_index,
            created_at: t.created_at,
            updated_at: t.created_at,
        };
        tables.video.push(created.clone());
        Ok(created)
    }

    async fn update(&self, u: VideoTestimonialUpdate) -> DomainResult<VideoTestimonial> {
        let mut tables = self.lock();
        let row = tables
            .video
            .iter_mut()
            .find(|r| r.id == u.id)
            .ok_or_else(|| DomainError::not_found("video testimonial"))?;
        merge(&mut row.client_name, u.client_name.as_ref());
        merge(&mut row.client_company, u.client_company.as_ref());
        merge(&mut row.video_url, u.video_url.as_ref());
        merge(&mut row.thumbnail_url, u.thumbnail_url.as_ref());
        merge(&mut row.visible, u.visible.as_ref());
        merge(&mut row.order_index, u.order_index.as_ref());
        row.updated_at = u.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: VideoTestimonialId) -> DomainResult<()> {
        remove_by(&mut self.lock().video, "video testimonial", |r| r.id == id)
    }

    async fn find_by_id(&self, id: VideoTestimonialId) -> DomainResult<Option<VideoTestimonial>> {
        Ok(self.lock().video.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<VideoTestimonial>> {
        Ok(visible_rows(&self.lock().video, include_hidden))
    }

    async fn count_visible(&self) -> DomainResult<u64> {
        Ok(self.lock().video.iter().filter(|r| r.visible).count() as u64)
    }
}

/* --------------------------------- footer --------------------------------- */

#[async_trait]
impl FooterLinkRepository for InMemoryContent {
    async fn insert(&self, link: NewFooterLink) -> DomainResult<FooterLink> {
        let mut tables = self.lock();
        let created = FooterLink {
            id: FooterLinkId(tables.next_id()),
            title: link.title,
            url: link.url,
            category: link.category,
            icon_name: link.icon_name,
            visible: link.visible,
            order_index: link.order_index,
            created_at: link.created_at,
            updated_at: link.created_at,
        };
        tables.footer.push(created.clone());
        Ok(created)
    }

    async fn update(&self, u: FooterLinkUpdate) -> DomainResult<FooterLink> {
        let mut tables = self.lock();
        let row = tables
            .footer
            .iter_mut()
            .find(|r| r.id == u.id)
            .ok_or_else(|| DomainError::not_found("footer link"))?;
        merge(&mut row.title, u.title.as_ref());
        merge(&mut row.url, u.url.as_ref());
        merge(&mut row.category, u.category.as_ref());
        merge(&mut row.icon_name, u.icon_name.as_ref());
        merge(&mut row.visible, u.visible.as_ref());
        merge(&mut row.order_index, u.order_index.as_ref());
        row.updated_at = u.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: FooterLinkId) -> DomainResult<()> {
        remove_by(&mut self.lock().footer, "footer link", |r| r.id == id)
    }

    async fn find_by_id(&self, id: FooterLinkId) -> DomainResult<Option<FooterLink>> {
        Ok(self.lock().footer.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<FooterLink>> {
        Ok(visible_rows(&self.lock().footer, include_hidden))
    }
}

/* -------------------------------- showcase -------------------------------- */

#[async_trait]
impl ShowcaseAppRepository for InMemoryContent {
    async fn insert(&self, app: NewShowcaseApp) -> DomainResult<ShowcaseApp> {
        let mut tables = self.lock();
        let created = ShowcaseApp {
            id: ShowcaseAppId(tables.next_id()),
            app_name: app.app_name,
            logo_url: app.logo_url,
            app_url: app.app_url,
            description: app.description,
            category: app.category,
            scroll_direction: app.scroll_direction,
            scroll_speed: app.scroll_speed,
            visible: app.visible,
            order_index: app.order_index,
            created_at: app.created_at,
            updated_at: app.created_at,
        };
        tables.showcase.push(created.clone());
        Ok(created)
    }

    async fn update(&self, u: ShowcaseAppUpdate) -> DomainResult<ShowcaseApp> {
        let mut tables = self.lock();
        let row = tables
            .showcase
            .iter_mut()
            .find(|r| r.id == u.id)
            .ok_or_else(|| DomainError::not_found("showcase app"))?;
        merge(&mut row.app_name, u.app_name.as_ref());
        merge(&mut row.logo_url, u.logo_url.as_ref());
        merge(&mut row.app_url, u.app_url.as_ref());
        merge(&mut row.description, u.description.as_ref());
        merge(&mut row.category, u.category.as_ref());
        merge(&mut row.scroll_direction, u.scroll_direction.as_ref());
        merge(&mut row.scroll_speed, u.scroll_speed.as_ref());
        merge(&mut row.visible, u.visible.as_ref());
        merge(&mut row.order_index, u.order_index.as_ref());
        row.updated_at = u.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ShowcaseAppId) -> DomainResult<()> {
        remove_by(&mut self.lock().showcase, "showcase app", |r| r.id == id)
    }

    async fn find_by_id(&self, id: ShowcaseAppId) -> DomainResult<Option<ShowcaseApp>> {
        Ok(self.lock().showcase.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<ShowcaseApp>> {
        Ok(visible_rows(&self.lock().showcase, include_hidden))
    }
}

/* -------------------------------- display --------------------------------- */

#[async_trait]
impl DisplaySettingsRepository for InMemoryContent {
    async fn set_visibility(
        &self,
        collection: Collection,
        id: i64,
        visible: bool,
    ) -> DomainResult<DisplaySettings> {
        with_display(&mut self.lock(), collection, id, |v, _| *v = visible)
    }

    async fn set_order_index(
        &self,
        collection: Collection,
        id: i64,
        order_index: OrderIndex,
    ) -> DomainResult<DisplaySettings> {
        with_display(&mut self.lock(), collection, id, |_, o| *o = order_index)
    }
}
