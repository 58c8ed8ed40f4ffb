//
//  backlog-client
//  api/endpoints/star.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Stars.

use serde::Serialize;
use serde_json::json;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiError, ApiResponse, Result};

const ADD: &[Field] = &[
    Field::new("issueId"),
    Field::new("commentId"),
    Field::new("wikiId"),
    Field::new("pullRequestId"),
    Field::new("pullRequestCommentId"),
];

/// What a star is given to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTarget {
    Issue(u64),
    Comment(u64),
    Wiki(u64),
    PullRequest(u64),
    PullRequestComment(u64),
}

impl StarTarget {
    /// Wire name and id of the target.
    pub fn param(&self) -> (&'static str, u64) {
        match *self {
            StarTarget::Issue(id) => ("issueId", id),
            StarTarget::Comment(id) => ("commentId", id),
            StarTarget::Wiki(id) => ("wikiId", id),
            StarTarget::PullRequest(id) => ("pullRequestId", id),
            StarTarget::PullRequestComment(id) => ("pullRequestCommentId", id),
        }
    }
}

/// Loose form of [`StarTarget`] where exactly one id must be set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarOptions {
    pub issue_id: Option<u64>,
    pub comment_id: Option<u64>,
    pub wiki_id: Option<u64>,
    pub pull_request_id: Option<u64>,
    pub pull_request_comment_id: Option<u64>,
}

impl TryFrom<&StarOptions> for StarTarget {
    type Error = ApiError;

    fn try_from(options: &StarOptions) -> Result<Self> {
        let targets: Vec<StarTarget> = [
            options.issue_id.map(StarTarget::Issue),
            options.comment_id.map(StarTarget::Comment),
            options.wiki_id.map(StarTarget::Wiki),
            options.pull_request_id.map(StarTarget::PullRequest),
            options.pull_request_comment_id.map(StarTarget::PullRequestComment),
        ]
        .into_iter()
        .flatten()
        .collect();

        match targets.as_slice() {
            [target] => Ok(*target),
            [] => Err(ApiError::validation("a star needs one target, none given")),
            _ => Err(ApiError::validation(format!(
                "a star takes exactly one target, {} given",
                targets.len()
            ))),
        }
    }
}

facade!(
    /// `/api/v2/stars`
    Stars,
    "stars"
);

impl<'a> Stars<'a> {
    /// Stars exactly one issue, comment, wiki page, pull request or pull
    /// request comment.
    pub async fn add(&self, target: StarTarget) -> Result<ApiResponse> {
        let (key, id) = target.param();
        self.resource.post("", ADD, &json!({ key: id })).await
    }

    /// Same as [`add`](Self::add), checking that exactly one id is set.
    pub async fn add_from(&self, options: &StarOptions) -> Result<ApiResponse> {
        self.add(StarTarget::try_from(options)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_single_target() {
        let (key, id) = StarTarget::PullRequestComment(9).param();
        let params = schema::build(ADD, &json!({ key: id })).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["pullRequestCommentId"]);
    }

    #[test]
    fn test_options_need_exactly_one_target() {
        let none = StarOptions::default();
        assert!(matches!(StarTarget::try_from(&none), Err(ApiError::Validation(_))));

        let two = StarOptions {
            issue_id: Some(1),
            wiki_id: Some(2),
            ..Default::default()
        };
        assert!(matches!(StarTarget::try_from(&two), Err(ApiError::Validation(_))));

        let one = StarOptions {
            wiki_id: Some(2),
            ..Default::default()
        };
        assert_eq!(StarTarget::try_from(&one).unwrap(), StarTarget::Wiki(2));
    }
}
