//
//  backlog-client
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Endpoint facades, one per resource type.
//!
//! Each facade is obtained from the client:
//!
//! | Accessor | Resource |
//! |----------|----------|
//! | [`BacklogClient::space`] | Space, activities, logo, notification, disk usage |
//! | [`BacklogClient::licence`] | Space licence |
//! | [`BacklogClient::attachments`] | File upload |
//! | [`BacklogClient::priorities`] / [`BacklogClient::resolutions`] | Fixed lists |
//! | [`BacklogClient::users`] | Users, icons, stars, recently viewed |
//! | [`BacklogClient::projects`] | Projects, members, administrators, teams |
//! | [`BacklogClient::categories`] | Project categories |
//! | [`BacklogClient::issue_types`] | Project issue types |
//! | [`BacklogClient::statuses`] | Project statuses |
//! | [`BacklogClient::versions`] | Versions / milestones |
//! | [`BacklogClient::custom_fields`] | Custom fields and list items |
//! | [`BacklogClient::webhooks`] | Webhooks |
//! | [`BacklogClient::shared_files`] | Project shared files |
//! | [`BacklogClient::git_repositories`] | Git repositories |
//! | [`BacklogClient::pull_requests`] | Pull requests, comments, attachments |
//! | [`BacklogClient::issues`] | Issues, comments, attachments, shared files |
//! | [`BacklogClient::wikis`] | Wiki pages |
//! | [`BacklogClient::teams`] | Teams |
//! | [`BacklogClient::watchings`] | Watch list |
//! | [`BacklogClient::notifications`] | Notifications |
//! | [`BacklogClient::stars`] | Stars |
//!
//! Every operation returns the raw [`ApiResponse`](super::common::ApiResponse)
//! (or a [`Download`](super::common::Download) for file endpoints).

use serde::Serialize;

use super::client::BacklogClient;
use super::common::schema::{self, Field};
use super::common::Order;

/// Wraps a [`Resource`](super::resource::Resource) rooted at `$base` in a named facade struct.
macro_rules! facade {
    ($(#[$meta:meta])* $name:ident, $base:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            resource: $crate::api::resource::Resource<'a>,
        }

        impl<'a> $name<'a> {
            pub fn new(client: &'a $crate::api::client::BacklogClient) -> Self {
                Self {
                    resource: $crate::api::resource::Resource::new(client, $base),
                }
            }
        }
    };
}

pub(crate) use facade;

pub mod attachment;
pub mod category;
pub mod custom_field;
pub mod git_repository;
pub mod issue;
pub mod issue_type;
pub mod licence;
pub mod notification;
pub mod priority;
pub mod project;
pub mod pull_request;
pub mod resolution;
pub mod shared_file;
pub mod space;
pub mod star;
pub mod status;
pub mod team;
pub mod user;
pub mod version;
pub mod watch;
pub mod webhook;
pub mod wiki;

pub use attachment::Attachments;
pub use category::Categories;
pub use custom_field::CustomFields;
pub use git_repository::GitRepositories;
pub use issue::Issues;
pub use issue_type::IssueTypes;
pub use licence::Licence;
pub use notification::Notifications;
pub use priority::Priorities;
pub use project::Projects;
pub use pull_request::PullRequests;
pub use resolution::Resolutions;
pub use shared_file::SharedFiles;
pub use space::Space;
pub use star::Stars;
pub use status::Statuses;
pub use team::Teams;
pub use user::Users;
pub use version::Versions;
pub use watch::Watchings;
pub use webhook::Webhooks;
pub use wiki::Wikis;

/// Space and project feeds accept activity types 1 to 26.
pub const ACTIVITY_TYPE_ID: Field = Field::new("activityTypeId").array().range(1, 26);

/// User feeds accept activity types 1 (issue created) to 17 (pull request comment).
pub const USER_ACTIVITY_TYPE_ID: Field = Field::new("activityTypeId").array().range(1, 17);

/// Schema of [`ActivityOptions`] for the space and project feeds.
pub const ACTIVITIES: &[Field] = &[
    ACTIVITY_TYPE_ID,
    schema::MIN_ID,
    schema::MAX_ID,
    schema::COUNT,
    schema::ORDER,
];

/// Schema of [`ActivityOptions`] for the user feed.
pub const USER_ACTIVITIES: &[Field] = &[
    USER_ACTIVITY_TYPE_ID,
    schema::MIN_ID,
    schema::MAX_ID,
    schema::COUNT,
    schema::ORDER,
];

/// Schema of [`IdPageOptions`].
pub const ID_PAGE: &[Field] = &[schema::MIN_ID, schema::MAX_ID, schema::COUNT, schema::ORDER];

/// Schema of [`OffsetPageOptions`].
pub const OFFSET_PAGE: &[Field] = &[schema::ORDER, schema::OFFSET, schema::COUNT];

/// Filters for the space, project and user "recent updates" feeds.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOptions {
    /// Activity types to include (1-26, or 1-17 for user feeds).
    pub activity_type_id: Vec<u64>,
    pub min_id: Option<u64>,
    pub max_id: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
    pub order: Option<Order>,
}

/// Paging by id window, used by comment, star and history lists.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdPageOptions {
    pub min_id: Option<u64>,
    pub max_id: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
    pub order: Option<Order>,
}

/// Paging by offset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPageOptions {
    pub order: Option<Order>,
    pub offset: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
}

impl BacklogClient {
    pub fn space(&self) -> Space<'_> {
        Space::new(self)
    }

    pub fn licence(&self) -> Licence<'_> {
        Licence::new(self)
    }

    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(self)
    }

    pub fn priorities(&self) -> Priorities<'_> {
        Priorities::new(self)
    }

    pub fn resolutions(&self) -> Resolutions<'_> {
        Resolutions::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    pub fn issue_types(&self) -> IssueTypes<'_> {
        IssueTypes::new(self)
    }

    pub fn statuses(&self) -> Statuses<'_> {
        Statuses::new(self)
    }

    pub fn versions(&self) -> Versions<'_> {
        Versions::new(self)
    }

    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub fn shared_files(&self) -> SharedFiles<'_> {
        SharedFiles::new(self)
    }

    pub fn git_repositories(&self) -> GitRepositories<'_> {
        GitRepositories::new(self)
    }

    pub fn pull_requests(&self) -> PullRequests<'_> {
        PullRequests::new(self)
    }

    pub fn issues(&self) -> Issues<'_> {
        Issues::new(self)
    }

    pub fn wikis(&self) -> Wikis<'_> {
        Wikis::new(self)
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams::new(self)
    }

    pub fn watchings(&self) -> Watchings<'_> {
        Watchings::new(self)
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    pub fn stars(&self) -> Stars<'_> {
        Stars::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_options_match_schemas() {
        assert!(schema::build(ACTIVITIES, &ActivityOptions::default()).unwrap().is_empty());
        assert!(schema::build(ID_PAGE, &IdPageOptions::default()).unwrap().is_empty());
        assert!(schema::build(OFFSET_PAGE, &OffsetPageOptions::default()).unwrap().is_empty());
    }

    fn activity_types(ids: &[u64]) -> ActivityOptions {
        ActivityOptions {
            activity_type_id: ids.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_space_and_project_activity_range() {
        let ok = activity_types(&[1, 18, 26]);
        assert_eq!(schema::build(ACTIVITIES, &ok).unwrap().get_all("activityTypeId[]").len(), 3);

        assert!(schema::build(ACTIVITIES, &activity_types(&[27])).is_err());
        assert!(schema::build(ACTIVITIES, &activity_types(&[0])).is_err());
    }

    #[test]
    fn test_user_activity_range() {
        let ok = activity_types(&[1, 17]);
        assert_eq!(schema::build(USER_ACTIVITIES, &ok).unwrap().get_all("activityTypeId[]").len(), 2);

        assert!(schema::build(USER_ACTIVITIES, &activity_types(&[18])).is_err());
    }
}
