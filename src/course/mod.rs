//! Course content model
//!
//! Five node kinds in a fixed hierarchy, each backed by a descriptor file
//! (zones by an entry inside their assessment's descriptor).

pub mod descriptor;
pub mod layout;
pub mod node;
pub mod resolver;

pub use node::{
    Assessment, ChildGroup, Children, Course, CourseEntity, CourseInstance, Node, NodeKind,
    Question, Zone,
};
pub use resolver::find_course_root;
