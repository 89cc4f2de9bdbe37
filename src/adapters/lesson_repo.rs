use crate::domain::model::Lesson;
use crate::domain::ports::LessonRepository;
use serde::{Deserialize, Serialize};

fn seed_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(1, "Introduction to PHP", 30),
        Lesson::new(2, "Object-Oriented Programming", 45),
        Lesson::new(3, "SOLID Principles", 60),
    ]
}

/// Lessons kept as a plain list, as if read from a flat file.
#[derive(Debug, Clone)]
pub struct FileLessonRepository {
    lessons: Vec<Lesson>,
}

impl FileLessonRepository {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }
}

impl Default for FileLessonRepository {
    fn default() -> Self {
        Self::new(seed_lessons())
    }
}

impl LessonRepository for FileLessonRepository {
    fn get_all(&self) -> Vec<Lesson> {
        self.lessons.clone()
    }
}

/// ORM-style result set. Stays inside the ORM repository; callers only ever
/// see the `Vec<Lesson>` it converts into.
#[derive(Debug, Clone, Default)]
pub struct LessonCollection {
    items: Vec<Lesson>,
}

impl LessonCollection {
    pub fn new(items: Vec<Lesson>) -> Self {
        Self { items }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn to_vec(&self) -> Vec<Lesson> {
        self.items.clone()
    }
}

impl From<LessonCollection> for Vec<Lesson> {
    fn from(collection: LessonCollection) -> Self {
        collection.items
    }
}

/// Lessons loaded through an ORM-like collection.
#[derive(Debug, Clone)]
pub struct EloquentLessonRepository {
    collection: LessonCollection,
}

impl EloquentLessonRepository {
    pub fn new(collection: LessonCollection) -> Self {
        Self { collection }
    }
}

impl Default for EloquentLessonRepository {
    fn default() -> Self {
        Self::new(LessonCollection::new(seed_lessons()))
    }
}

impl LessonRepository for EloquentLessonRepository {
    fn get_all(&self) -> Vec<Lesson> {
        tracing::debug!("Converting collection of {} lessons", self.collection.count());
        self.collection.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LessonSource {
    #[default]
    File,
    Orm,
}

impl LessonSource {
    pub fn into_repository(self) -> Box<dyn LessonRepository> {
        match self {
            LessonSource::File => Box::new(FileLessonRepository::default()),
            LessonSource::Orm => Box::new(EloquentLessonRepository::default()),
        }
    }
}
