use std::sync::Arc;

use crate::domain::{comment::CommentReadRepository, post::PostReadRepository};

pub struct CommentQueryService {
    pub(super) comment_reads: Arc<dyn CommentReadRepository>,
    pub(super) post_reads: Arc<dyn PostReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_reads: Arc<dyn CommentReadRepository>,
        post_reads: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            comment_reads,
            post_reads,
        }
    }
}
