use chrono::Utc;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, Set};
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    contact_messages, experience, projects, skills, testimonials,
};
use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::experience::{
    Experience, ExperienceDraft, ExperiencePatch, ExperienceRecord,
};
use crate::modules::content::application::domain::messages::{
    MessageDraft, MessageFilter, MessagePatch, MessageRecord, Messages,
};
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::projects::{
    ProjectDraft, ProjectFilter, ProjectPatch, ProjectRecord, Projects,
};
use crate::modules::content::application::domain::skills::{
    SkillDraft, SkillPatch, SkillRecord, Skills,
};
use crate::modules::content::application::domain::testimonials::{
    TestimonialDraft, TestimonialFilter, TestimonialPatch, TestimonialRecord, Testimonials,
};

//
// ──────────────────────────────────────────────────────────
// StoreBinding
// ──────────────────────────────────────────────────────────
// Ties a collection declaration to its table: model <-> record mapping,
// draft/patch -> ActiveModel, filter -> Condition, canonical display order.
// The generic postgres adapter is written once against this trait.
//

pub trait StoreBinding: Collection {
    type Entity: EntityTrait<Model: Send + Sync>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    fn record(model: <Self::Entity as EntityTrait>::Model) -> Self::Record;

    /// Builds the insert row; the store assigns id and creation timestamp here.
    fn insert_model(draft: Self::Draft) -> Self::ActiveModel;

    /// Builds a partial update row; untouched fields stay NotSet.
    fn patch_model(patch: Self::Patch) -> Self::ActiveModel;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn filter_condition(filter: &Self::Filter) -> Condition;

    /// Canonical composite display order. `created_at` breaks sort-order ties,
    /// keeping tied records stable by insertion order.
    fn order_by() -> Vec<(<Self::Entity as EntityTrait>::Column, Order)>;
}

fn set_opt<T>(slot: &mut sea_orm::ActiveValue<Option<T>>, field: PatchField<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

impl StoreBinding for Projects {
    type Entity = projects::Entity;
    type ActiveModel = projects::ActiveModel;

    fn record(model: projects::Model) -> ProjectRecord {
        ProjectRecord {
            id: model.id,
            title: model.title,
            description: model.description,
            long_description: model.long_description,
            image_url: model.image_url,
            demo_url: model.demo_url,
            github_url: model.github_url,
            technologies: model.technologies,
            featured: model.featured,
            order_index: model.order_index,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }

    fn insert_model(draft: ProjectDraft) -> projects::ActiveModel {
        let now = Utc::now().fixed_offset();
        projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            description: Set(draft.description),
            long_description: Set(draft.long_description),
            image_url: Set(draft.image_url),
            demo_url: Set(draft.demo_url),
            github_url: Set(draft.github_url),
            technologies: Set(draft.technologies.into_vec()),
            featured: Set(draft.featured),
            order_index: Set(draft.order_index),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn patch_model(patch: ProjectPatch) -> projects::ActiveModel {
        let mut model = <projects::ActiveModel as ActiveModelTrait>::default();
        if let PatchField::Value(v) = patch.title {
            model.title = Set(v);
        }
        if let PatchField::Value(v) = patch.description {
            model.description = Set(v);
        }
        set_opt(&mut model.long_description, patch.long_description);
        set_opt(&mut model.image_url, patch.image_url);
        set_opt(&mut model.demo_url, patch.demo_url);
        set_opt(&mut model.github_url, patch.github_url);
        if let PatchField::Value(v) = patch.technologies {
            model.technologies = Set(v.into_vec());
        }
        if let PatchField::Value(v) = patch.featured {
            model.featured = Set(v);
        }
        if let PatchField::Value(v) = patch.order_index {
            model.order_index = Set(v);
        }
        if model.is_changed() {
            model.updated_at = Set(Utc::now().fixed_offset());
        }
        model
    }

    fn id_column() -> projects::Column {
        projects::Column::Id
    }

    fn filter_condition(filter: &ProjectFilter) -> Condition {
        let mut cond = Condition::all();
        if let Some(featured) = filter.featured {
            cond = cond.add(ColumnTrait::eq(&projects::Column::Featured, featured));
        }
        cond
    }

    fn order_by() -> Vec<(projects::Column, Order)> {
        vec![
            (projects::Column::OrderIndex, Order::Asc),
            (projects::Column::CreatedAt, Order::Asc),
        ]
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

impl StoreBinding for Skills {
    type Entity = skills::Entity;
    type ActiveModel = skills::ActiveModel;

    fn record(model: skills::Model) -> SkillRecord {
        SkillRecord {
            id: model.id,
            name: model.name,
            category: model.category,
            proficiency: model.proficiency,
            icon: model.icon,
            order_index: model.order_index,
            created_at: model.created_at.into(),
        }
    }

    fn insert_model(draft: SkillDraft) -> skills::ActiveModel {
        skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            category: Set(draft.category),
            proficiency: Set(draft.proficiency),
            icon: Set(draft.icon),
            order_index: Set(draft.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn patch_model(patch: SkillPatch) -> skills::ActiveModel {
        let mut model = <skills::ActiveModel as ActiveModelTrait>::default();
        if let PatchField::Value(v) = patch.name {
            model.name = Set(v);
        }
        if let PatchField::Value(v) = patch.category {
            model.category = Set(v);
        }
        if let PatchField::Value(v) = patch.proficiency {
            model.proficiency = Set(v);
        }
        set_opt(&mut model.icon, patch.icon);
        if let PatchField::Value(v) = patch.order_index {
            model.order_index = Set(v);
        }
        model
    }

    fn id_column() -> skills::Column {
        skills::Column::Id
    }

    fn filter_condition(_filter: &()) -> Condition {
        Condition::all()
    }

    /// Grouped views read this order directly: category first, then the
    /// sort key within the category.
    fn order_by() -> Vec<(skills::Column, Order)> {
        vec![
            (skills::Column::Category, Order::Asc),
            (skills::Column::OrderIndex, Order::Asc),
            (skills::Column::CreatedAt, Order::Asc),
        ]
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

impl StoreBinding for Experience {
    type Entity = experience::Entity;
    type ActiveModel = experience::ActiveModel;

    fn record(model: experience::Model) -> ExperienceRecord {
        ExperienceRecord {
            id: model.id,
            company: model.company,
            position: model.position,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            current: model.current,
            location: model.location,
            technologies: model.technologies,
            order_index: model.order_index,
            created_at: model.created_at.into(),
        }
    }

    fn insert_model(draft: ExperienceDraft) -> experience::ActiveModel {
        experience::ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(draft.company),
            position: Set(draft.position),
            description: Set(draft.description),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            current: Set(draft.current),
            location: Set(draft.location),
            technologies: Set(draft.technologies.into_vec()),
            order_index: Set(draft.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn patch_model(patch: ExperiencePatch) -> experience::ActiveModel {
        let mut model = <experience::ActiveModel as ActiveModelTrait>::default();
        if let PatchField::Value(v) = patch.company {
            model.company = Set(v);
        }
        if let PatchField::Value(v) = patch.position {
            model.position = Set(v);
        }
        if let PatchField::Value(v) = patch.description {
            model.description = Set(v);
        }
        if let PatchField::Value(v) = patch.start_date {
            model.start_date = Set(v);
        }
        set_opt(&mut model.end_date, patch.end_date);
        if let PatchField::Value(v) = patch.current {
            model.current = Set(v);
        }
        set_opt(&mut model.location, patch.location);
        if let PatchField::Value(v) = patch.technologies {
            model.technologies = Set(v.into_vec());
        }
        if let PatchField::Value(v) = patch.order_index {
            model.order_index = Set(v);
        }
        model
    }

    fn id_column() -> experience::Column {
        experience::Column::Id
    }

    fn filter_condition(_filter: &()) -> Condition {
        Condition::all()
    }

    fn order_by() -> Vec<(experience::Column, Order)> {
        vec![
            (experience::Column::OrderIndex, Order::Asc),
            (experience::Column::CreatedAt, Order::Asc),
        ]
    }
}

//
// ──────────────────────────────────────────────────────────
// Testimonials
// ──────────────────────────────────────────────────────────
//

impl StoreBinding for Testimonials {
    type Entity = testimonials::Entity;
    type ActiveModel = testimonials::ActiveModel;

    fn record(model: testimonials::Model) -> TestimonialRecord {
        TestimonialRecord {
            id: model.id,
            name: model.name,
            position: model.position,
            company: model.company,
            content: model.content,
            avatar_url: model.avatar_url,
            rating: model.rating,
            featured: model.featured,
            order_index: model.order_index,
            created_at: model.created_at.into(),
        }
    }

    fn insert_model(draft: TestimonialDraft) -> testimonials::ActiveModel {
        testimonials::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            position: Set(draft.position),
            company: Set(draft.company),
            content: Set(draft.content),
            avatar_url: Set(draft.avatar_url),
            rating: Set(draft.rating),
            featured: Set(draft.featured),
            order_index: Set(draft.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn patch_model(patch: TestimonialPatch) -> testimonials::ActiveModel {
        let mut model = <testimonials::ActiveModel as ActiveModelTrait>::default();
        if let PatchField::Value(v) = patch.name {
            model.name = Set(v);
        }
        if let PatchField::Value(v) = patch.position {
            model.position = Set(v);
        }
        if let PatchField::Value(v) = patch.company {
            model.company = Set(v);
        }
        if let PatchField::Value(v) = patch.content {
            model.content = Set(v);
        }
        set_opt(&mut model.avatar_url, patch.avatar_url);
        if let PatchField::Value(v) = patch.rating {
            model.rating = Set(v);
        }
        if let PatchField::Value(v) = patch.featured {
            model.featured = Set(v);
        }
        if let PatchField::Value(v) = patch.order_index {
            model.order_index = Set(v);
        }
        model
    }

    fn id_column() -> testimonials::Column {
        testimonials::Column::Id
    }

    fn filter_condition(filter: &TestimonialFilter) -> Condition {
        let mut cond = Condition::all();
        if let Some(featured) = filter.featured {
            cond = cond.add(testimonials::Column::Featured.eq(featured));
        }
        cond
    }

    fn order_by() -> Vec<(testimonials::Column, Order)> {
        vec![
            (testimonials::Column::OrderIndex, Order::Asc),
            (testimonials::Column::CreatedAt, Order::Asc),
        ]
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────
//

impl StoreBinding for Messages {
    type Entity = contact_messages::Entity;
    type ActiveModel = contact_messages::ActiveModel;

    fn record(model: contact_messages::Model) -> MessageRecord {
        MessageRecord {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            read: model.read,
            created_at: model.created_at.into(),
        }
    }

    fn insert_model(draft: MessageDraft) -> contact_messages::ActiveModel {
        contact_messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            email: Set(draft.email),
            subject: Set(draft.subject),
            message: Set(draft.message),
            read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn patch_model(patch: MessagePatch) -> contact_messages::ActiveModel {
        let mut model = <contact_messages::ActiveModel as ActiveModelTrait>::default();
        if let PatchField::Value(v) = patch.read {
            model.read = Set(v);
        }
        model
    }

    fn id_column() -> contact_messages::Column {
        contact_messages::Column::Id
    }

    fn filter_condition(filter: &MessageFilter) -> Condition {
        let mut cond = Condition::all();
        if let Some(read) = filter.read {
            cond = cond.add(ColumnTrait::eq(&contact_messages::Column::Read, read));
        }
        cond
    }

    /// Inbox order: newest first.
    fn order_by() -> Vec<(contact_messages::Column, Order)> {
        vec![(contact_messages::Column::CreatedAt, Order::Desc)]
    }
}
