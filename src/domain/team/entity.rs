// src/domain/team/entity.rs
use crate::domain::content::ids::record_id;
use crate::domain::content::text::optional_text;
use crate::domain::content::{DisplayOrdered, OrderIndex, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

record_id!(TeamMemberId, "team member");

/// Profile links shown on a team card. Stored as a single JSON column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl SocialLinks {
    /// Drop blank entries submitted by the admin form.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            linkedin: optional_text(self.linkedin),
            twitter: optional_text(self.twitter),
            portfolio: optional_text(self.portfolio),
            github: optional_text(self.github),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub full_name: String,
    pub slug: Slug,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub short_bio: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub social_links: SocialLinks,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for TeamMember {
    fn order_index(&self) -> OrderIndex {
        self.order_index
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn record_id(&self) -> i64 {
        self.id.into()
    }
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub full_name: String,
    pub slug: Slug,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub short_bio: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub social_links: SocialLinks,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TeamMemberUpdate {
    pub id: TeamMemberId,
    pub full_name: Option<String>,
    pub slug: Option<Slug>,
    pub job_title: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub short_bio: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub social_links: Option<SocialLinks>,
    pub visible: Option<bool>,
    pub order_index: Option<OrderIndex>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMemberUpdate {
    pub fn new(id: TeamMemberId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: None,
            slug: None,
            job_title: None,
            department: None,
            short_bio: None,
            bio: None,
            location: None,
            email: None,
            phone: None,
            photo_url: None,
            is_featured: None,
            social_links: None,
            visible: None,
            order_index: None,
            updated_at,
        }
    }

    pub fn apply_to(&self, member: &mut TeamMember) {
        fn merge(target: &mut Option<String>, value: Option<&Option<String>>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        if let Some(name) = &self.full_name {
            member.full_name.clone_from(name);
        }
        if let Some(slug) = &self.slug {
            member.slug = slug.clone();
        }
        merge(&mut member.job_title, self.job_title.as_ref());
        merge(&mut member.department, self.department.as_ref());
        merge(&mut member.short_bio, self.short_bio.as_ref());
        merge(&mut member.bio, self.bio.as_ref());
        merge(&mut member.location, self.location.as_ref());
        merge(&mut member.email, self.email.as_ref());
        merge(&mut member.phone, self.phone.as_ref());
        merge(&mut member.photo_url, self.photo_url.as_ref());
        if let Some(featured) = self.is_featured {
            member.is_featured = featured;
        }
        if let Some(links) = &self.social_links {
            member.social_links = links.clone();
        }
        if let Some(visible) = self.visible {
            member.visible = visible;
        }
        if let Some(order_index) = self.order_index {
            member.order_index = order_index;
        }
        member.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_drop_blank_entries() {
        let links = SocialLinks {
            linkedin: Some("https://linkedin.com/in/jane".into()),
            twitter: Some(String::new()),
            portfolio: Some("  ".into()),
            github: None,
        }
        .normalized();
        assert!(links.linkedin.is_some());
        assert!(links.twitter.is_none());
        assert!(links.portfolio.is_none());
    }
}
