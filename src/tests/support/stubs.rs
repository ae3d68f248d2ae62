use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::experience::ExperienceRecord;
use crate::modules::content::application::domain::messages::MessageRecord;
use crate::modules::content::application::domain::projects::ProjectRecord;
use crate::modules::content::application::domain::skills::SkillRecord;
use crate::modules::content::application::domain::testimonials::TestimonialRecord;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentStats, CreateEntryError, CreateEntryUseCase, DeleteEntryError, DeleteEntryUseCase,
    GetContentStatsError, GetContentStatsUseCase, ListEntriesError, ListEntriesUseCase,
    UpdateEntryError, UpdateEntryUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError, ListQuery,
};
use crate::modules::session::application::ports::outgoing::session_gate::{
    AdminClaims, SessionGate, SessionGateError,
};
use crate::modules::showcase::application::ports::incoming::use_cases::{
    AboutContent, GetAboutContentUseCase, GetHomeContentUseCase, HomeContent,
};

/* --------------------------------------------------
 * Sample records
 * -------------------------------------------------- */

pub fn sample_project_record(title: &str, order_index: i32, featured: bool) -> ProjectRecord {
    ProjectRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "desc".to_string(),
        long_description: None,
        image_url: None,
        demo_url: None,
        github_url: None,
        technologies: vec!["Rust".to_string()],
        featured,
        order_index,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_skill_record(name: &str, category: &str, order_index: i32) -> SkillRecord {
    SkillRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        proficiency: 80,
        icon: None,
        order_index,
        created_at: Utc::now(),
    }
}

pub fn sample_experience_record(company: &str, order_index: i32) -> ExperienceRecord {
    ExperienceRecord {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: "Engineer".to_string(),
        description: "Built things".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        end_date: None,
        current: true,
        location: None,
        technologies: vec!["Rust".to_string()],
        order_index,
        created_at: Utc::now(),
    }
}

pub fn sample_testimonial_record(
    name: &str,
    order_index: i32,
    featured: bool,
    rating: i32,
) -> TestimonialRecord {
    TestimonialRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        position: "CTO".to_string(),
        company: "Acme".to_string(),
        content: "Great work".to_string(),
        avatar_url: None,
        rating,
        featured,
        order_index,
        created_at: Utc::now(),
    }
}

pub fn sample_message_record(name: &str, read: bool) -> MessageRecord {
    MessageRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: "sender@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "A message".to_string(),
        read,
        created_at: Utc::now(),
    }
}

/* --------------------------------------------------
 * MockStore: programmable ContentStore that records
 * what reached it
 * -------------------------------------------------- */

pub struct MockStore<C: Collection> {
    list_result: Result<Vec<C::Record>, ContentStoreError>,
    count_result: Result<u64, ContentStoreError>,
    insert_record: Option<C::Record>,
    insert_error: Option<ContentStoreError>,
    update_result: Result<(), ContentStoreError>,
    delete_result: Result<(), ContentStoreError>,
    pub seen_draft: Mutex<Option<C::Draft>>,
    pub seen_patch: Mutex<Option<C::Patch>>,
    pub seen_filters: Mutex<Vec<Option<C::Filter>>>,
    pub seen_limits: Mutex<Vec<Option<u64>>>,
    pub deleted_ids: Mutex<Vec<Uuid>>,
}

impl<C: Collection> MockStore<C> {
    fn base() -> Self {
        Self {
            list_result: Ok(Vec::new()),
            count_result: Ok(0),
            insert_record: None,
            insert_error: None,
            update_result: Ok(()),
            delete_result: Ok(()),
            seen_draft: Mutex::new(None),
            seen_patch: Mutex::new(None),
            seen_filters: Mutex::new(Vec::new()),
            seen_limits: Mutex::new(Vec::new()),
            deleted_ids: Mutex::new(Vec::new()),
        }
    }

    /// Every operation succeeds; reads are empty.
    pub fn ok() -> Self {
        Self::base()
    }

    pub fn listing(records: Vec<C::Record>) -> Self {
        Self {
            list_result: Ok(records),
            ..Self::base()
        }
    }

    pub fn counting(count: u64) -> Self {
        Self {
            count_result: Ok(count),
            ..Self::base()
        }
    }

    pub fn inserting(record: C::Record) -> Self {
        Self {
            insert_record: Some(record),
            ..Self::base()
        }
    }

    /// Every operation fails with the given error.
    pub fn failing(err: ContentStoreError) -> Self {
        Self {
            list_result: Err(err.clone()),
            count_result: Err(err.clone()),
            insert_error: Some(err.clone()),
            update_result: Err(err.clone()),
            delete_result: Err(err),
            ..Self::base()
        }
    }
}

#[async_trait]
impl<C: Collection> ContentStore<C> for MockStore<C> {
    async fn list(&self, query: ListQuery<C>) -> Result<Vec<C::Record>, ContentStoreError> {
        self.seen_filters.lock().unwrap().push(query.filter);
        self.seen_limits.lock().unwrap().push(query.limit);
        self.list_result.clone()
    }

    async fn count(&self, filter: Option<C::Filter>) -> Result<u64, ContentStoreError> {
        self.seen_filters.lock().unwrap().push(filter);
        self.count_result.clone()
    }

    async fn insert(&self, draft: C::Draft) -> Result<C::Record, ContentStoreError> {
        if let Some(err) = &self.insert_error {
            return Err(err.clone());
        }
        *self.seen_draft.lock().unwrap() = Some(draft);
        match &self.insert_record {
            Some(record) => Ok(record.clone()),
            None => Err(ContentStoreError::Unavailable(
                "no insert result programmed".to_string(),
            )),
        }
    }

    async fn update(&self, _id: Uuid, patch: C::Patch) -> Result<(), ContentStoreError> {
        if self.update_result.is_ok() {
            *self.seen_patch.lock().unwrap() = Some(patch);
        }
        self.update_result.clone()
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        if self.delete_result.is_ok() {
            self.deleted_ids.lock().unwrap().push(id);
        }
        self.delete_result.clone()
    }
}

/* --------------------------------------------------
 * Stub use cases
 * -------------------------------------------------- */

pub struct StubListEntriesUseCase<C: Collection> {
    result: Result<Vec<C::Record>, ListEntriesError>,
}

impl<C: Collection> StubListEntriesUseCase<C> {
    pub fn success(records: Vec<C::Record>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListEntriesError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl<C: Collection> ListEntriesUseCase<C> for StubListEntriesUseCase<C> {
    async fn execute(&self, _query: ListQuery<C>) -> Result<Vec<C::Record>, ListEntriesError> {
        self.result.clone()
    }
}

pub struct StubCreateEntryUseCase<C: Collection> {
    result: Result<C::Record, CreateEntryError>,
}

impl<C: Collection> StubCreateEntryUseCase<C> {
    pub fn success(record: C::Record) -> Self {
        Self { result: Ok(record) }
    }

    pub fn validation_failure(msg: &str) -> Self {
        Self {
            result: Err(CreateEntryError::Validation(msg.to_string())),
        }
    }

    pub fn store_failure(msg: &str) -> Self {
        Self {
            result: Err(CreateEntryError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl<C: Collection> CreateEntryUseCase<C> for StubCreateEntryUseCase<C> {
    async fn execute(&self, _draft: C::Draft) -> Result<C::Record, CreateEntryError> {
        self.result.clone()
    }
}

pub struct StubUpdateEntryUseCase {
    result: Result<(), UpdateEntryError>,
}

impl StubUpdateEntryUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateEntryError::NotFound),
        }
    }

    pub fn store_failure(msg: &str) -> Self {
        Self {
            result: Err(UpdateEntryError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl<C: Collection> UpdateEntryUseCase<C> for StubUpdateEntryUseCase {
    async fn execute(&self, _id: Uuid, _patch: C::Patch) -> Result<(), UpdateEntryError> {
        self.result.clone()
    }
}

pub struct StubDeleteEntryUseCase {
    result: Result<(), DeleteEntryError>,
}

impl StubDeleteEntryUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(DeleteEntryError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl<C: Collection> DeleteEntryUseCase<C> for StubDeleteEntryUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteEntryError> {
        self.result.clone()
    }
}

pub struct StubGetContentStatsUseCase {
    result: Result<ContentStats, GetContentStatsError>,
}

impl StubGetContentStatsUseCase {
    pub fn success(stats: ContentStats) -> Self {
        Self { result: Ok(stats) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetContentStatsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetContentStatsUseCase for StubGetContentStatsUseCase {
    async fn execute(&self) -> Result<ContentStats, GetContentStatsError> {
        self.result.clone()
    }
}

pub struct StubGetHomeContentUseCase {
    content: HomeContent,
}

impl StubGetHomeContentUseCase {
    pub fn new(content: HomeContent) -> Self {
        Self { content }
    }
}

#[async_trait]
impl GetHomeContentUseCase for StubGetHomeContentUseCase {
    async fn execute(&self) -> HomeContent {
        self.content.clone()
    }
}

pub struct StubGetAboutContentUseCase {
    content: AboutContent,
}

impl StubGetAboutContentUseCase {
    pub fn new(content: AboutContent) -> Self {
        Self { content }
    }
}

#[async_trait]
impl GetAboutContentUseCase for StubGetAboutContentUseCase {
    async fn execute(&self) -> AboutContent {
        self.content.clone()
    }
}

/* --------------------------------------------------
 * Session gate stub
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSessionGate {
    result: Result<AdminClaims, SessionGateError>,
}

impl StubSessionGate {
    pub fn admin(admin_id: Uuid) -> Self {
        Self {
            result: Ok(AdminClaims {
                sub: admin_id,
                exp: 9_999_999_999,
                iat: 0,
                is_admin: true,
            }),
        }
    }

    pub fn visitor(user_id: Uuid) -> Self {
        Self {
            result: Ok(AdminClaims {
                sub: user_id,
                exp: 9_999_999_999,
                iat: 0,
                is_admin: false,
            }),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            result: Err(SessionGateError::InvalidToken),
        }
    }
}

impl SessionGate for StubSessionGate {
    fn verify(&self, _token: &str) -> Result<AdminClaims, SessionGateError> {
        self.result.clone()
    }
}
