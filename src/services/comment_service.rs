/*
 * Responsibility
 * - One method per comment RPC: parse ids, call the repo, shape the response
 * - Own the service-level error kinds (CommentError)
 * - The only place where the repo's NotFound becomes CommentError::NotFound (delete)
 */
use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use crate::proto::comment::{
    CommentInfo, CreateCommentRequest, CreateCommentResponse, DeleteCommentRequest,
    DeleteCommentResponse, HealthzRequest, HealthzResponse, ListCommentRequest,
    ListCommentResponse, UpdateCommentRequest, UpdateCommentResponse,
};
use crate::repos::{CommentRepo, CommentRow, CommentUpdate, NewComment, RepoError};
use crate::services::id_codec::{self, IdCodecError};

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("invalid comment id")]
    InvalidId,
    #[error("comment not found")]
    NotFound,
    // Anything else the repo reports, untouched.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<IdCodecError> for CommentError {
    fn from(_: IdCodecError) -> Self {
        CommentError::InvalidId
    }
}

#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepo>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepo>) -> Self {
        Self { repo }
    }

    pub fn backend_name(&self) -> &'static str {
        self.repo.backend_name()
    }

    pub async fn healthz(&self, _req: HealthzRequest) -> HealthzResponse {
        HealthzResponse {
            status: "ok".to_string(),
        }
    }

    #[instrument(
        skip(self, req),
        fields(video_id = %req.video_id, limit = req.limit, offset = req.skip)
    )]
    pub async fn list_comment(
        &self,
        req: ListCommentRequest,
    ) -> Result<ListCommentResponse, CommentError> {
        let rows = self.repo.list(&req.video_id, req.limit, req.skip).await?;

        let comments = rows.into_iter().map(comment_info).collect();
        Ok(ListCommentResponse { comments })
    }

    #[instrument(skip(self, req), fields(video_id = %req.video_id))]
    pub async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<CreateCommentResponse, CommentError> {
        let comment = NewComment {
            video_id: req.video_id,
            content: req.content,
        };
        let id = self.repo.create(comment).await?;

        Ok(CreateCommentResponse {
            id: id_codec::encode(id),
        })
    }

    #[instrument(skip(self, req), fields(comment_id = %req.id))]
    pub async fn update_comment(
        &self,
        req: UpdateCommentRequest,
    ) -> Result<UpdateCommentResponse, CommentError> {
        let id = id_codec::decode(&req.id)?;

        let comment = CommentUpdate {
            id,
            content: req.content,
        };
        self.repo.update(comment).await?;

        Ok(UpdateCommentResponse {})
    }

    #[instrument(skip(self, req), fields(comment_id = %req.id))]
    pub async fn delete_comment(
        &self,
        req: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, CommentError> {
        let id = id_codec::decode(&req.id)?;

        match self.repo.delete(id).await {
            Ok(()) => Ok(DeleteCommentResponse {}),
            Err(RepoError::NotFound) => Err(CommentError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

fn comment_info(row: CommentRow) -> CommentInfo {
    CommentInfo {
        id: id_codec::encode(row.id),
        video_id: row.video_id,
        content: row.content,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::repos::InMemoryCommentRepo;
    use crate::repos::test_support::{CountingRepo, FailingRepo};

    fn setup() -> (Arc<CountingRepo>, CommentService) {
        let repo = Arc::new(CountingRepo::new(InMemoryCommentRepo::new()));
        let service = CommentService::new(repo.clone());
        (repo, service)
    }

    async fn create(service: &CommentService, video_id: &str, content: &str) -> String {
        service
            .create_comment(CreateCommentRequest {
                video_id: video_id.to_string(),
                content: content.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    async fn list(
        service: &CommentService,
        video_id: &str,
        limit: u32,
        skip: u32,
    ) -> Vec<CommentInfo> {
        service
            .list_comment(ListCommentRequest {
                video_id: video_id.to_string(),
                limit,
                skip,
            })
            .await
            .unwrap()
            .comments
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let (repo, service) = setup();

        let res = service.healthz(HealthzRequest::default()).await;

        assert_eq!(res.status, "ok");
        assert_eq!(repo.calls().total(), 0);
    }

    #[tokio::test]
    async fn create_returns_fresh_parseable_ids() {
        let (_repo, service) = setup();

        let a = create(&service, "v1", "hi").await;
        let b = create(&service, "v1", "hi").await;

        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert!(Uuid::parse_str(&b).is_ok());
    }

    #[tokio::test]
    async fn create_accepts_empty_fields() {
        let (_repo, service) = setup();

        let id = create(&service, "", "").await;

        let all = list(&service, "", 10, 0).await;
        assert_eq!(
            all,
            vec![CommentInfo {
                id,
                video_id: String::new(),
                content: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn list_respects_filter_and_limit() {
        let (_repo, service) = setup();
        for i in 0..4 {
            create(&service, "v1", &format!("c{i}")).await;
        }
        create(&service, "v2", "elsewhere").await;

        let page = list(&service, "v1", 3, 0).await;
        assert_eq!(page.len(), 3);
        assert!(page.iter().all(|c| c.video_id == "v1"));

        assert!(list(&service, "nope", 10, 0).await.is_empty());
        assert!(list(&service, "v1", 0, 0).await.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_content_and_keeps_video() {
        let (_repo, service) = setup();
        let id = create(&service, "v1", "hi").await;

        service
            .update_comment(UpdateCommentRequest {
                id: id.clone(),
                content: "bye".to_string(),
            })
            .await
            .unwrap();

        let comments = list(&service, "v1", 10, 0).await;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, id);
        assert_eq!(comments[0].video_id, "v1");
        assert_eq!(comments[0].content, "bye");
    }

    #[tokio::test]
    async fn update_of_missing_comment_propagates_repo_error() {
        let (_repo, service) = setup();

        let err = service
            .update_comment(UpdateCommentRequest {
                id: Uuid::new_v4().to_string(),
                content: "bye".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::Repo(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn malformed_ids_never_reach_the_repo() {
        let (repo, service) = setup();

        let err = service
            .update_comment(UpdateCommentRequest {
                id: "not-a-uuid".to_string(),
                content: "x".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::InvalidId));

        let err = service
            .delete_comment(DeleteCommentRequest {
                id: "not-a-uuid".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::InvalidId));

        assert_eq!(repo.calls().total(), 0);
    }

    #[tokio::test]
    async fn second_delete_reports_comment_not_found() {
        let (_repo, service) = setup();
        let id = create(&service, "v1", "hi").await;

        service
            .delete_comment(DeleteCommentRequest { id: id.clone() })
            .await
            .unwrap();
        let err = service
            .delete_comment(DeleteCommentRequest { id })
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::NotFound));
        assert!(list(&service, "v1", 10, 0).await.is_empty());
    }

    #[tokio::test]
    async fn repo_failures_pass_through_unchanged() {
        let service = CommentService::new(Arc::new(FailingRepo));

        let err = service
            .list_comment(ListCommentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Repo(RepoError::Db(_))));

        let err = service
            .create_comment(CreateCommentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Repo(RepoError::Db(_))));

        let err = service
            .delete_comment(DeleteCommentRequest {
                id: Uuid::new_v4().to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Repo(RepoError::Db(_))));
    }

    #[tokio::test]
    async fn full_comment_lifecycle() {
        let (_repo, service) = setup();

        let id = create(&service, "v1", "hi").await;
        assert!(list(&service, "v1", 10, 0).await.contains(&CommentInfo {
            id: id.clone(),
            video_id: "v1".to_string(),
            content: "hi".to_string(),
        }));

        service
            .update_comment(UpdateCommentRequest {
                id: id.clone(),
                content: "bye".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(list(&service, "v1", 10, 0).await[0].content, "bye");

        service
            .delete_comment(DeleteCommentRequest { id: id.clone() })
            .await
            .unwrap();
        let err = service
            .delete_comment(DeleteCommentRequest { id })
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::NotFound));
    }
}
