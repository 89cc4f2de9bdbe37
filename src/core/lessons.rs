use crate::core::LessonRepository;

/// Renders a lesson listing from any repository.
pub fn display_lessons<R: LessonRepository + ?Sized>(repo: &R) -> String {
    let lessons = repo.get_all();

    let mut out = format!("Found {} lessons:", lessons.len());
    for lesson in &lessons {
        out.push_str(&format!("\n- {} ({} min)", lesson.title, lesson.duration));
    }
    out
}

pub fn total_duration<R: LessonRepository + ?Sized>(repo: &R) -> u32 {
    repo.get_all().iter().map(|lesson| lesson.duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::lesson_repo::{EloquentLessonRepository, FileLessonRepository};
    use crate::core::Lesson;

    #[test]
    fn test_display_lessons() {
        let listing = display_lessons(&FileLessonRepository::default());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "Found 3 lessons:");
        assert_eq!(lines[1], "- Introduction to PHP (30 min)");
        assert_eq!(lines[3], "- SOLID Principles (60 min)");
    }

    #[test]
    fn test_repositories_are_interchangeable() {
        let repos: Vec<Box<dyn LessonRepository>> = vec![
            Box::new(FileLessonRepository::default()),
            Box::new(EloquentLessonRepository::default()),
        ];

        let listings: Vec<String> = repos.iter().map(|r| display_lessons(r.as_ref())).collect();
        assert_eq!(listings[0], listings[1]);

        for repo in &repos {
            assert_eq!(total_duration(repo.as_ref()), 135);
        }
    }

    #[test]
    fn test_empty_repository() {
        let repo = FileLessonRepository::new(Vec::<Lesson>::new());
        assert_eq!(display_lessons(&repo), "Found 0 lessons:");
        assert_eq!(total_duration(&repo), 0);
    }
}
