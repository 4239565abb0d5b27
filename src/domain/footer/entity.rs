// src/domain/footer/entity.rs
use crate::domain::content::ids::record_id;
use crate::domain::content::{DisplayOrdered, OrderIndex};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

record_id!(FooterLinkId, "footer link");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FooterCategory {
    #[default]
    Page,
    Social,
    Other,
}

impl FooterCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Social => "social",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FooterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FooterCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "social" => Ok(Self::Social),
            "other" => Ok(Self::Other),
            other => Err(DomainError::Validation(format!(
                "unknown footer category '{other}'"
            ))),
        }
    }
}

/// Icon shown next to a social footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
    Github,
    Youtube,
}

impl SocialPlatform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Github => "github",
            Self::Youtube => "youtube",
        }
    }
}

impl FromStr for SocialPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "instagram" => Ok(Self::Instagram),
            "github" => Ok(Self::Github),
            "youtube" => Ok(Self::Youtube),
            other => Err(DomainError::Validation(format!(
                "unknown social icon '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FooterLink {
    pub id: FooterLinkId,
    pub title: String,
    pub url: String,
    pub category: FooterCategory,
    pub icon_name: Option<SocialPlatform>,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for FooterLink {
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

/// Icons only render for social links; any other category stores none.
pub fn icon_for(
    category: FooterCategory,
    icon: Option<SocialPlatform>,
) -> DomainResult<Option<SocialPlatform>> {
    match (category, icon) {
        (FooterCategory::Social, None) => Err(DomainError::Validation(
            "social footer links need an icon_name".into(),
        )),
        (FooterCategory::Social, icon) => Ok(icon),
        (_, _) => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct NewFooterLink {
    pub title: String,
    pub url: String,
    pub category: FooterCategory,
    pub icon_name: Option<SocialPlatform>,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FooterLinkUpdate {
    pub id: FooterLinkId,
    pub title: Option<String>,
    pub url: Option<String>,
    pub category: Option<FooterCategory>,
    pub icon_name: Option<Option<SocialPlatform>>,
    pub visible: Option<bool>,
    pub order_index: Option<OrderIndex>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_only_apply_to_social_links() {
        assert_eq!(
            icon_for(FooterCategory::Page, Some(SocialPlatform::Github)).unwrap(),
            None
        );
        assert_eq!(
            icon_for(FooterCategory::Social, Some(SocialPlatform::Github)).unwrap(),
            Some(SocialPlatform::Github)
        );
        assert!(icon_for(FooterCategory::Social, None).is_err());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in [FooterCategory::Page, FooterCategory::Social, FooterCategory::Other] {
            assert_eq!(category.as_str().parse::<FooterCategory>().unwrap(), category);
        }
        assert!("menu".parse::<FooterCategory>().is_err());
    }
}
