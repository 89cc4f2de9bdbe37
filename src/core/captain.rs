use crate::core::{Manageable, ShiftLog, Sleepable, Workable, Worker};

/// Runs a crew. Each call asks workers for a capability instead of
/// assuming every worker can do everything.
#[derive(Debug, Default)]
pub struct Captain {
    log: ShiftLog,
}

impl Captain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manage(&mut self, worker: &dyn Manageable) {
        self.log.extend(worker.be_managed());
    }

    pub fn assign_work(&mut self, worker: &dyn Workable) {
        self.log.push("Captain: Assigning work...");
        self.log.extend(worker.work());
    }

    pub fn schedule_rest(&mut self, worker: &dyn Sleepable) {
        self.log.push("Captain: Time for rest...");
        self.log.extend(worker.sleep());
    }

    pub fn manage_team(&mut self, workers: &[Box<dyn Worker>]) {
        for manageable in workers.iter().filter_map(|w| w.as_manageable()) {
            self.manage(manageable);
        }
    }

    pub fn coordinate_work(&mut self, workers: &[Box<dyn Worker>]) {
        for workable in workers.iter().filter_map(|w| w.as_workable()) {
            self.assign_work(workable);
        }
    }

    pub fn rest_team(&mut self, workers: &[Box<dyn Worker>]) {
        for worker in workers {
            match worker.as_sleepable() {
                Some(sleeper) => self.schedule_rest(sleeper),
                None => tracing::debug!("{} does not rest, skipping", worker.name()),
            }
        }
    }

    pub fn log(&self) -> &ShiftLog {
        &self.log
    }

    pub fn into_log(self) -> ShiftLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::workers::{AndroidWorker, HumanWorker};

    fn crew() -> Vec<Box<dyn Worker>> {
        vec![
            Box::new(HumanWorker::new("Ada")),
            Box::new(AndroidWorker::new("R2")),
        ]
    }

    #[test]
    fn test_manage_team_never_asks_android_to_sleep() {
        let mut captain = Captain::new();
        captain.manage_team(&crew());

        assert_eq!(
            captain.log().lines,
            vec![
                "Human Ada is working hard...",
                "Human Ada is taking a well-deserved rest...",
                "Android R2 is working efficiently...",
            ]
        );
    }

    #[test]
    fn test_coordinate_work_reaches_every_worker() {
        let mut captain = Captain::new();
        captain.coordinate_work(&crew());

        let log = captain.into_log();
        assert_eq!(log.len(), 4);
        assert_eq!(log.lines[0], "Captain: Assigning work...");
        assert_eq!(log.lines[3], "Android R2 is working efficiently...");
    }

    #[test]
    fn test_rest_team_only_schedules_sleepers() {
        let mut captain = Captain::new();
        captain.rest_team(&crew());

        assert_eq!(
            captain.log().lines,
            vec![
                "Captain: Time for rest...",
                "Human Ada is taking a well-deserved rest...",
            ]
        );
    }

    #[test]
    fn test_direct_capability_calls() {
        let human = HumanWorker::new("Grace");
        let mut captain = Captain::new();
        captain.assign_work(&human);
        captain.schedule_rest(&human);
        captain.manage(&AndroidWorker::new("K9"));
        assert_eq!(captain.log().len(), 5);
    }

    #[test]
    fn test_empty_crew() {
        let mut captain = Captain::new();
        captain.manage_team(&[]);
        assert!(captain.log().is_empty());
    }
}
