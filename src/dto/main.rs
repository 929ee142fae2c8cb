use crate::domain::person::Person;
use crate::pagination::Paginated;

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Paginated list of people to show in the table.
    pub people: Paginated<Person>,
}
