// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, posts::PostCommandService},
        ports::{time::Clock, unit_of_work::UnitOfWork},
        queries::{comments::CommentQueryService, posts::PostQueryService},
    },
    domain::{comment::CommentReadRepository, post::PostReadRepository},
};

/// The four services a presentation adapter drives. Commands share one
/// unit of work; queries read the committed state directly.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        unit_of_work: Arc<dyn UnitOfWork>,
        post_reads: Arc<dyn PostReadRepository>,
        comment_reads: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&unit_of_work),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&unit_of_work),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_reads)));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_reads),
            Arc::clone(&post_reads),
        ));

        Self {
            post_commands,
            comment_commands,
            post_queries,
            comment_queries,
        }
    }
}
