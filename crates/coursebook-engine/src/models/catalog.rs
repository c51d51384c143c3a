use super::course::Course;

/// Every course available to the viewer, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub courses: Vec<Course>,
}

impl Catalog {
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
