//! Typed course nodes backed by on-demand descriptor loading
//!
//! Every node is a handle over a path (zones: descriptor path plus index).
//! Nothing is cached: each title, description or enumeration re-reads the
//! filesystem, so edits made while the navigator runs show up on the next
//! visit. This is deliberate and must stay that way; a zone index that goes
//! stale between listing and descent surfaces as [`NavError::ZoneMissing`].

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use walkdir::WalkDir;

use crate::core::error::{NavError, Result};
use crate::course::descriptor::{
    self, AssessmentInfo, CourseInfo, CourseInstanceInfo, QuestionInfo, ZoneInfo,
};
use crate::course::layout;
use crate::course::resolver::find_course_root;

/// Lazy, finite sequence of child nodes; every call re-scans from disk
pub type Children = Box<dyn Iterator<Item = Result<Node>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Course,
    CourseInstance,
    Assessment,
    Zone,
    Question,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Course => "Course",
            NodeKind::CourseInstance => "Course Instance",
            NodeKind::Assessment => "Assessment",
            NodeKind::Zone => "Zone",
            NodeKind::Question => "Question",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named group of children a node can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildGroup {
    CourseInstances,
    Assessments,
    Zones,
    Questions,
}

impl ChildGroup {
    pub fn name(&self) -> &'static str {
        match self {
            ChildGroup::CourseInstances => "Course Instances",
            ChildGroup::Assessments => "Assessments",
            ChildGroup::Zones => "Zones",
            ChildGroup::Questions => "Questions",
        }
    }

    /// Menu label used to open this group
    pub fn label(&self) -> String {
        format!("View {}", self.name())
    }
}

/// Capabilities shared by every node kind
pub trait CourseEntity {
    type Descriptor: DeserializeOwned;

    const KIND: NodeKind;

    /// Human-readable location for headers
    fn location(&self) -> String;

    /// Descriptor as raw JSON (for descriptions)
    fn load_raw(&self) -> Result<Value>;

    fn load_descriptor(&self) -> Result<Self::Descriptor>;

    fn display_title(&self) -> Result<String>;

    fn child_groups(&self) -> &'static [ChildGroup] {
        &[]
    }

    /// Children of one group; groups the node doesn't have are empty
    fn enumerate(&self, _group: ChildGroup) -> Result<Children> {
        Ok(Box::new(std::iter::empty()))
    }

    /// All children across every group, group by group
    fn enumerate_children(&self) -> Result<Children> {
        let mut all: Children = Box::new(std::iter::empty());
        for group in self.child_groups() {
            let next = self.enumerate(*group)?;
            all = Box::new(all.chain(next));
        }
        Ok(all)
    }
}

fn require_marker(kind: NodeKind, path: &Path, marker: &'static str) -> Result<()> {
    if path.join(marker).is_file() {
        Ok(())
    } else {
        Err(NavError::MissingMarker {
            kind: kind.as_str(),
            path: path.to_path_buf(),
            marker,
        })
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Path of `path` below `base`, `/`-separated; falls back to the dir name
fn relative_id(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        _ => dir_name(path),
    }
}

/// Question ids are relative paths made only of plain names
fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && Path::new(id)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Recursively find directories under `base` accepted by `is_match`.
///
/// A missing `base` just means the course has none of these yet.
fn walk_for(
    base: PathBuf,
    is_match: fn(&Path) -> bool,
    open: fn(&Path, PathBuf) -> Result<Node>,
) -> Children {
    if !base.is_dir() {
        return Box::new(std::iter::empty());
    }

    let walker = WalkDir::new(&base).min_depth(1).into_iter();
    Box::new(
        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter(move |entry| is_match(entry.path()))
            .map(move |entry| open(&base, entry.into_path())),
    )
}

// ============================================================================
// Course
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    path: PathBuf,
}

impl Course {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        require_marker(NodeKind::Course, &path, layout::COURSE_MARKER)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(layout::COURSE_MARKER)
    }

    /// Immediate subdirectories of `courseInstances/` holding an instance descriptor
    pub fn instances(&self) -> Children {
        let base = self.path.join(layout::INSTANCES_DIR);
        let entries = match fs::read_dir(&base) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("No course instances at {}: {}", base.display(), err);
                return Box::new(std::iter::empty());
            }
        };

        Box::new(
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| layout::is_instance_dir(path))
                .map(move |path| CourseInstance::open_in(&base, path).map(Node::CourseInstance)),
        )
    }

    /// Question directories anywhere under `questions/`
    pub fn questions(&self) -> Children {
        walk_for(
            self.path.join(layout::QUESTIONS_DIR),
            layout::is_question_dir,
            |base, path| Question::open_in(base, path).map(Node::Question),
        )
    }
}

impl CourseEntity for Course {
    type Descriptor = CourseInfo;

    const KIND: NodeKind = NodeKind::Course;

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value> {
        descriptor::load_raw(&self.descriptor_path())
    }

    fn load_descriptor(&self) -> Result<CourseInfo> {
        descriptor::load(&self.descriptor_path())
    }

    fn display_title(&self) -> Result<String> {
        let info = self.load_descriptor()?;
        Ok(format!("{}: {}", info.name, info.title))
    }

    fn child_groups(&self) -> &'static [ChildGroup] {
        &[ChildGroup::CourseInstances, ChildGroup::Questions]
    }

    fn enumerate(&self, group: ChildGroup) -> Result<Children> {
        Ok(match group {
            ChildGroup::CourseInstances => self.instances(),
            ChildGroup::Questions => self.questions(),
            _ => Box::new(std::iter::empty()),
        })
    }
}

// ============================================================================
// Course instance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseInstance {
    path: PathBuf,
    id: String,
}

impl CourseInstance {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let id = dir_name(&path);
        Self::build(path, id)
    }

    /// Open with an id relative to `base` (normally `courseInstances/`)
    pub fn open_in(base: &Path, path: PathBuf) -> Result<Self> {
        let id = relative_id(base, &path);
        Self::build(path, id)
    }

    fn build(path: PathBuf, id: String) -> Result<Self> {
        require_marker(NodeKind::CourseInstance, &path, layout::INSTANCE_MARKER)?;
        Ok(Self { path, id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(layout::INSTANCE_MARKER)
    }

    /// Assessment directories anywhere under `assessments/`
    pub fn assessments(&self) -> Children {
        walk_for(
            self.path.join(layout::ASSESSMENTS_DIR),
            layout::is_assessment_dir,
            |base, path| Assessment::open_in(base, path).map(Node::Assessment),
        )
    }
}

impl CourseEntity for CourseInstance {
    type Descriptor = CourseInstanceInfo;

    const KIND: NodeKind = NodeKind::CourseInstance;

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value> {
        descriptor::load_raw(&self.descriptor_path())
    }

    fn load_descriptor(&self) -> Result<CourseInstanceInfo> {
        descriptor::load(&self.descriptor_path())
    }

    /// `longName`, or the directory id when the instance has none
    fn display_title(&self) -> Result<String> {
        let info = self.load_descriptor()?;
        Ok(info.long_name.unwrap_or_else(|| self.id.clone()))
    }

    fn child_groups(&self) -> &'static [ChildGroup] {
        &[ChildGroup::Assessments]
    }

    fn enumerate(&self, group: ChildGroup) -> Result<Children> {
        Ok(match group {
            ChildGroup::Assessments => self.assessments(),
            _ => Box::new(std::iter::empty()),
        })
    }
}

// ============================================================================
// Assessment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    path: PathBuf,
    id: String,
}

impl Assessment {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let id = dir_name(&path);
        Self::build(path, id)
    }

    /// Open with an id relative to `base` (normally `assessments/`)
    pub fn open_in(base: &Path, path: PathBuf) -> Result<Self> {
        let id = relative_id(base, &path);
        Self::build(path, id)
    }

    fn build(path: PathBuf, id: String) -> Result<Self> {
        require_marker(NodeKind::Assessment, &path, layout::ASSESSMENT_MARKER)?;
        Ok(Self { path, id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(layout::ASSESSMENT_MARKER)
    }

    /// One zone per entry of the descriptor's `zones` array, in array order.
    ///
    /// Only the count is read here; each zone re-reads its entry on access.
    pub fn zones(&self) -> Result<Children> {
        let count = self.load_descriptor()?.zones.len();
        let descriptor_path = self.descriptor_path();
        Ok(Box::new((0..count).map(move |index| {
            Ok::<_, NavError>(Node::Zone(Zone::new(descriptor_path.clone(), index)))
        })))
    }
}

impl CourseEntity for Assessment {
    type Descriptor = AssessmentInfo;

    const KIND: NodeKind = NodeKind::Assessment;

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value> {
        descriptor::load_raw(&self.descriptor_path())
    }

    fn load_descriptor(&self) -> Result<AssessmentInfo> {
        descriptor::load(&self.descriptor_path())
    }

    fn display_title(&self) -> Result<String> {
        let info = self.load_descriptor()?;
        Ok(format!("{} {} ({})", info.set, info.number, info.title))
    }

    fn child_groups(&self) -> &'static [ChildGroup] {
        &[ChildGroup::Zones]
    }

    fn enumerate(&self, group: ChildGroup) -> Result<Children> {
        match group {
            ChildGroup::Zones => self.zones(),
            _ => Ok(Box::new(std::iter::empty())),
        }
    }
}

// ============================================================================
// Zone
// ============================================================================

/// Position `index` in the `zones` array of an assessment descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    assessment: PathBuf,
    index: usize,
}

impl Zone {
    /// `assessment` is the descriptor file, not the assessment directory
    pub fn new(assessment: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            assessment: assessment.into(),
            index,
        }
    }

    pub fn assessment_descriptor(&self) -> &Path {
        &self.assessment
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Questions referenced by this zone, resolved against the course root
    /// that owns the assessment (never a `questions/` inside the instance).
    pub fn questions(&self) -> Result<Children> {
        let info = self.load_descriptor()?;
        let questions_dir = find_course_root(&self.assessment)?.join(layout::QUESTIONS_DIR);

        let mut ids = Vec::new();
        for entry in &info.questions {
            let entry_ids = entry.ids().ok_or_else(|| NavError::QuestionRef {
                assessment: self.assessment.clone(),
                zone: self.index,
            })?;
            ids.extend(entry_ids);
        }

        if let Some(id) = ids.iter().find(|id| !is_plain_id(id)) {
            return Err(NavError::QuestionOutsideCourse {
                assessment: self.assessment.clone(),
                zone: self.index,
                id: id.clone(),
            });
        }

        Ok(Box::new(ids.into_iter().map(move |id| {
            Question::with_id(questions_dir.join(&id), id).map(Node::Question)
        })))
    }
}

impl CourseEntity for Zone {
    type Descriptor = ZoneInfo;

    const KIND: NodeKind = NodeKind::Zone;

    fn location(&self) -> String {
        format!("{} [zone {}]", self.assessment.display(), self.index + 1)
    }

    fn load_raw(&self) -> Result<Value> {
        let assessment = descriptor::load_raw(&self.assessment)?;
        assessment
            .get("zones")
            .and_then(|zones| zones.get(self.index))
            .cloned()
            .ok_or_else(|| NavError::ZoneMissing {
                assessment: self.assessment.clone(),
                index: self.index,
            })
    }

    fn load_descriptor(&self) -> Result<ZoneInfo> {
        descriptor::decode(&self.assessment, self.load_raw()?)
    }

    fn display_title(&self) -> Result<String> {
        let info = self.load_descriptor()?;
        Ok(info
            .title
            .unwrap_or_else(|| format!("Zone {}", self.index + 1)))
    }

    fn child_groups(&self) -> &'static [ChildGroup] {
        &[ChildGroup::Questions]
    }

    fn enumerate(&self, group: ChildGroup) -> Result<Children> {
        match group {
            ChildGroup::Questions => self.questions(),
            _ => Ok(Box::new(std::iter::empty())),
        }
    }
}

// ============================================================================
// Question
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    path: PathBuf,
    id: String,
}

impl Question {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let id = dir_name(&path);
        Self::with_id(path, id)
    }

    /// Open with an id relative to `base` (normally `questions/`)
    pub fn open_in(base: &Path, path: PathBuf) -> Result<Self> {
        let id = relative_id(base, &path);
        Self::with_id(path, id)
    }

    pub fn with_id(path: PathBuf, id: impl Into<String>) -> Result<Self> {
        require_marker(NodeKind::Question, &path, layout::QUESTION_HTML)?;
        require_marker(NodeKind::Question, &path, layout::QUESTION_MARKER)?;
        Ok(Self {
            path,
            id: id.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(layout::QUESTION_MARKER)
    }
}

impl CourseEntity for Question {
    type Descriptor = QuestionInfo;

    const KIND: NodeKind = NodeKind::Question;

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value> {
        descriptor::load_raw(&self.descriptor_path())
    }

    fn load_descriptor(&self) -> Result<QuestionInfo> {
        descriptor::load(&self.descriptor_path())
    }

    fn display_title(&self) -> Result<String> {
        Ok(self.load_descriptor()?.title)
    }
}

// ============================================================================
// Node
// ============================================================================

/// Closed set of node kinds the navigator walks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Course(Course),
    CourseInstance(CourseInstance),
    Assessment(Assessment),
    Zone(Zone),
    Question(Question),
}

macro_rules! dispatch {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            Node::Course($inner) => $body,
            Node::CourseInstance($inner) => $body,
            Node::Assessment($inner) => $body,
            Node::Zone($inner) => $body,
            Node::Question($inner) => $body,
        }
    };
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Course(_) => Course::KIND,
            Node::CourseInstance(_) => CourseInstance::KIND,
            Node::Assessment(_) => Assessment::KIND,
            Node::Zone(_) => Zone::KIND,
            Node::Question(_) => Question::KIND,
        }
    }

    pub fn location(&self) -> String {
        dispatch!(self, n => n.location())
    }

    pub fn display_title(&self) -> Result<String> {
        dispatch!(self, n => n.display_title())
    }

    /// Label used when this node appears in its parent's child list.
    ///
    /// Directory-backed children carry their id so equal titles stay
    /// distinguishable; zones are positional and use their title alone.
    pub fn label(&self) -> Result<String> {
        let title = self.display_title()?;
        Ok(match self {
            Node::CourseInstance(n) => format!("{} ({})", title, n.id()),
            Node::Assessment(n) => format!("{} ({})", title, n.id()),
            Node::Question(n) => format!("{} ({})", title, n.id()),
            Node::Course(_) | Node::Zone(_) => title,
        })
    }

    /// Kind, title, location and every top-level descriptor field
    pub fn describe(&self) -> Result<String> {
        let raw = dispatch!(self, n => n.load_raw())?;
        let mut lines = vec![
            format!("{}: {}", self.kind(), self.display_title()?),
            format!("Location: {}", self.location()),
            String::new(),
        ];
        lines.extend(descriptor::describe_fields(&raw));
        Ok(lines.join("\n"))
    }

    pub fn child_groups(&self) -> &'static [ChildGroup] {
        dispatch!(self, n => n.child_groups())
    }

    pub fn children(&self, group: ChildGroup) -> Result<Children> {
        dispatch!(self, n => n.enumerate(group))
    }

    pub fn enumerate_children(&self) -> Result<Children> {
        dispatch!(self, n => n.enumerate_children())
    }
}
