use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::application::collection_use_cases::CollectionUseCases;
use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::experience::Experience;
use crate::modules::content::application::domain::messages::Messages;
use crate::modules::content::application::domain::projects::Projects;
use crate::modules::content::application::domain::skills::Skills;
use crate::modules::content::application::domain::testimonials::Testimonials;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentStats, CreateEntryUseCase, DeleteEntryUseCase, GetContentStatsUseCase,
    ListEntriesUseCase, UpdateEntryUseCase,
};
use crate::modules::session::application::ports::outgoing::session_gate::SessionGate;
use crate::modules::showcase::application::ports::incoming::use_cases::{
    AboutContent, GetAboutContentUseCase, GetHomeContentUseCase, HomeContent,
};
use crate::tests::support::stubs::*;
use crate::AppState;

fn stub_collection<C: Collection>() -> CollectionUseCases<C> {
    CollectionUseCases {
        list: Arc::new(StubListEntriesUseCase::<C>::success(Vec::new())),
        create: Arc::new(StubCreateEntryUseCase::<C>::store_failure(
            "not used in this test",
        )),
        update: Arc::new(StubUpdateEntryUseCase::success()),
        delete: Arc::new(StubDeleteEntryUseCase::success()),
    }
}

pub struct TestAppStateBuilder {
    projects: CollectionUseCases<Projects>,
    skills: CollectionUseCases<Skills>,
    experience: CollectionUseCases<Experience>,
    testimonials: CollectionUseCases<Testimonials>,
    messages: CollectionUseCases<Messages>,
    stats: Arc<dyn GetContentStatsUseCase>,
    home: Arc<dyn GetHomeContentUseCase>,
    about: Arc<dyn GetAboutContentUseCase>,
    gate: Arc<dyn SessionGate>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            projects: stub_collection(),
            skills: stub_collection(),
            experience: stub_collection(),
            testimonials: stub_collection(),
            messages: stub_collection(),
            stats: Arc::new(StubGetContentStatsUseCase::success(ContentStats {
                projects: 0,
                skills: 0,
                experience: 0,
                testimonials: 0,
                messages: 0,
                unread_messages: 0,
            })),
            home: Arc::new(StubGetHomeContentUseCase::new(HomeContent {
                featured_projects: Vec::new(),
                featured_testimonials: Vec::new(),
            })),
            about: Arc::new(StubGetAboutContentUseCase::new(AboutContent {
                skill_groups: Vec::new(),
                experience: Vec::new(),
            })),
            gate: Arc::new(StubSessionGate::admin(Uuid::new_v4())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_project_list(
        mut self,
        uc: impl ListEntriesUseCase<Projects> + 'static,
    ) -> Self {
        self.projects.list = Arc::new(uc);
        self
    }

    pub fn with_project_create(
        mut self,
        uc: impl CreateEntryUseCase<Projects> + 'static,
    ) -> Self {
        self.projects.create = Arc::new(uc);
        self
    }

    pub fn with_project_update(
        mut self,
        uc: impl UpdateEntryUseCase<Projects> + 'static,
    ) -> Self {
        self.projects.update = Arc::new(uc);
        self
    }

    pub fn with_project_delete(
        mut self,
        uc: impl DeleteEntryUseCase<Projects> + 'static,
    ) -> Self {
        self.projects.delete = Arc::new(uc);
        self
    }

    pub fn with_message_create(
        mut self,
        uc: impl CreateEntryUseCase<Messages> + 'static,
    ) -> Self {
        self.messages.create = Arc::new(uc);
        self
    }

    pub fn with_stats(mut self, uc: impl GetContentStatsUseCase + 'static) -> Self {
        self.stats = Arc::new(uc);
        self
    }

    pub fn with_home(mut self, uc: impl GetHomeContentUseCase + 'static) -> Self {
        self.home = Arc::new(uc);
        self
    }

    pub fn with_about(mut self, uc: impl GetAboutContentUseCase + 'static) -> Self {
        self.about = Arc::new(uc);
        self
    }

    pub fn with_gate(mut self, gate: impl SessionGate + 'static) -> Self {
        self.gate = Arc::new(gate);
        self
    }

    pub fn build(self) -> TestApp {
        let state = AppState {
            projects: self.projects,
            skills: self.skills,
            experience: self.experience,
            testimonials: self.testimonials,
            messages: self.messages,
            stats: self.stats,
            home: self.home,
            about: self.about,
        };

        TestApp {
            state: web::Data::new(state),
            gate: web::Data::new(self.gate),
        }
    }
}

pub struct TestApp {
    state: web::Data<AppState>,
    gate: web::Data<Arc<dyn SessionGate>>,
}

impl TestApp {
    pub fn data(&self) -> web::Data<AppState> {
        self.state.clone()
    }

    pub fn gate(&self) -> web::Data<Arc<dyn SessionGate>> {
        self.gate.clone()
    }
}
