// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use tanzaku_core::ApplicationServices;
use tanzaku_core::application::error::ApplicationResult;
use tanzaku_core::application::ports::time::Clock;
use tanzaku_core::application::ports::unit_of_work::{TransactionContext, UnitOfWork};
use tanzaku_core::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentRepository, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use tanzaku_core::domain::errors::DomainResult;
use tanzaku_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostRepository, PostUpdate, PostWriteRepository,
};

/// Committed state shared by the mock unit of work and the read
/// repositories, plus counters the property tests assert on.
#[derive(Default)]
pub struct InMemoryStore {
    posts: Mutex<HashMap<Uuid, Post>>,
    comments: Mutex<HashMap<Uuid, Comment>>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

impl InMemoryStore {
    pub fn seed_post(&self, post: Post) {
        self.posts.lock().unwrap().insert(Uuid::from(post.id), post);
    }

    pub fn seed_comment(&self, comment: Comment) {
        self.comments
            .lock()
            .unwrap()
            .insert(Uuid::from(comment.id), comment);
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

struct TxState {
    posts: HashMap<Uuid, Post>,
    comments: HashMap<Uuid, Comment>,
}

type SharedTxState = Arc<Mutex<TxState>>;

/// Snapshot-based unit of work: `begin` clones the committed maps, writes
/// land on the clone, `commit` swaps the clone in, `rollback` drops it.
pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWork {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn begin(&self) -> ApplicationResult<Box<dyn TransactionContext>> {
        let state = Arc::new(Mutex::new(TxState {
            posts: self.store.posts.lock().unwrap().clone(),
            comments: self.store.comments.lock().unwrap().clone(),
        }));
        Ok(Box::new(InMemoryTransactionContext {
            store: Arc::clone(&self.store),
            posts: InMemoryTxPosts {
                state: Arc::clone(&state),
            },
            comments: InMemoryTxComments {
                state: Arc::clone(&state),
            },
            state,
        }))
    }
}

struct InMemoryTransactionContext {
    store: Arc<InMemoryStore>,
    state: SharedTxState,
    posts: InMemoryTxPosts,
    comments: InMemoryTxComments,
}

#[async_trait]
impl TransactionContext for InMemoryTransactionContext {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    async fn commit(self: Box<Self>) -> ApplicationResult<()> {
        let state = self.state.lock().unwrap();
        *self.store.posts.lock().unwrap() = state.posts.clone();
        *self.store.comments.lock().unwrap() = state.comments.clone();
        self.store.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> ApplicationResult<()> {
        self.store.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct InMemoryTxPosts {
    state: SharedTxState,
}

#[async_trait]
impl PostReadRepository for InMemoryTxPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.state.lock().unwrap().posts.get(&Uuid::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.state.lock().unwrap().posts.values().cloned().collect();
        posts.sort_by_key(|post| post.created_at);
        Ok(posts)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryTxPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let stored = Post {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            status: post.status,
            created_at: post.created_at,
            updated_at: None,
        };
        self.state
            .lock()
            .unwrap()
            .posts
            .insert(Uuid::from(stored.id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut state = self.state.lock().unwrap();
        let Some(post) = state.posts.get_mut(&Uuid::from(update.id)) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        post.updated_at = Some(update.updated_at);
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .remove(&Uuid::from(id))
            .is_some())
    }
}

struct InMemoryTxComments {
    state: SharedTxState,
}

#[async_trait]
impl CommentReadRepository for InMemoryTxComments {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .comments
            .get(&Uuid::from(id))
            .cloned())
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .state
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);
        Ok(comments)
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryTxComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let stored = Comment {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
            author: comment.author,
            created_at: comment.created_at,
            updated_at: None,
        };
        self.state
            .lock()
            .unwrap()
            .comments
            .insert(Uuid::from(stored.id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>> {
        let mut state = self.state.lock().unwrap();
        let Some(comment) = state.comments.get_mut(&Uuid::from(update.id)) else {
            return Ok(None);
        };
        if let Some(content) = update.content {
            comment.content = content;
        }
        comment.updated_at = Some(update.updated_at);
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.state.lock().unwrap().comments.remove(&Uuid::from(id));
        Ok(())
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|_, comment| comment.post_id != post_id);
        Ok((before - state.comments.len()) as u64)
    }
}

pub struct InMemoryPostReads {
    store: Arc<InMemoryStore>,
}

impl InMemoryPostReads {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostReads {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.store.posts.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.store.posts.lock().unwrap().values().cloned().collect();
        posts.sort_by_key(|post| post.created_at);
        Ok(posts)
    }
}

pub struct InMemoryCommentReads {
    store: Arc<InMemoryStore>,
}

impl InMemoryCommentReads {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryCommentReads {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .get(&Uuid::from(id))
            .cloned())
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .store
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);
        Ok(comments)
    }
}

pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, delta: Duration) {
        *self.now.lock().unwrap() += delta;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<MockClock>,
    pub services: ApplicationServices,
}

pub fn in_memory_harness() -> TestHarness {
    let store = Arc::new(InMemoryStore::default());
    let clock = Arc::new(MockClock::at(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let services = ApplicationServices::new(
        Arc::new(InMemoryUnitOfWork::new(Arc::clone(&store))),
        Arc::new(InMemoryPostReads::new(Arc::clone(&store))),
        Arc::new(InMemoryCommentReads::new(Arc::clone(&store))),
        Arc::clone(&clock) as Arc<dyn Clock>,
    );
    TestHarness {
        store,
        clock,
        services,
    }
}
