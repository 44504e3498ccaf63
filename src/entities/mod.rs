//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod affirmation;
pub mod entry;
pub mod goal;
pub mod journal;
pub mod progress_event;
pub mod target;
pub mod template;

// Re-export specific types to avoid conflicts
pub use affirmation::{Column as AffirmationColumn, Entity as Affirmation, Model as AffirmationModel};
pub use entry::{Column as EntryColumn, Entity as Entry, Model as EntryModel};
pub use goal::{Column as GoalColumn, Entity as Goal, Model as GoalModel};
pub use journal::{Column as JournalColumn, Entity as Journal, Model as JournalModel};
pub use progress_event::{
    Column as ProgressEventColumn, Entity as ProgressEvent, Model as ProgressEventModel,
};
pub use target::{Column as TargetColumn, Entity as Target, Model as TargetModel};
pub use template::{Column as TemplateColumn, Entity as Template, Model as TemplateModel};
