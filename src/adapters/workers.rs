use crate::domain::ports::{Manageable, Sleepable, Workable, Worker};

#[derive(Debug, Clone)]
pub struct HumanWorker {
    name: String,
}

impl HumanWorker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Workable for HumanWorker {
    fn work(&self) -> Vec<String> {
        vec![format!("Human {} is working hard...", self.name)]
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) -> Vec<String> {
        vec![format!("Human {} is taking a well-deserved rest...", self.name)]
    }
}

impl Manageable for HumanWorker {
    fn be_managed(&self) -> Vec<String> {
        let mut lines = self.work();
        lines.extend(self.sleep());
        lines
    }
}

impl Worker for HumanWorker {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_workable(&self) -> Option<&dyn Workable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }

    fn as_manageable(&self) -> Option<&dyn Manageable> {
        Some(self)
    }
}

/// Works and can be managed. Never sleeps, so no `Sleepable` impl.
#[derive(Debug, Clone)]
pub struct AndroidWorker {
    name: String,
}

impl AndroidWorker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Workable for AndroidWorker {
    fn work(&self) -> Vec<String> {
        vec![format!("Android {} is working efficiently...", self.name)]
    }
}

impl Manageable for AndroidWorker {
    fn be_managed(&self) -> Vec<String> {
        self.work()
    }
}

impl Worker for AndroidWorker {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_workable(&self) -> Option<&dyn Workable> {
        Some(self)
    }

    fn as_manageable(&self) -> Option<&dyn Manageable> {
        Some(self)
    }
}
