use super::forms::PersonForm;
use super::{CatalogueError, CatalogueResult};
use crate::catalogue_store::validation::validate_person;
use crate::catalogue_store::{CatalogueStore, Person};
use tracing::info;

fn person_from_form(id: i64, form: PersonForm) -> Person {
    Person {
        id,
        name: form.name.trim().to_string(),
        surname: form.surname.trim().to_string(),
        role: form.role,
    }
}

pub fn list_people(store: &dyn CatalogueStore) -> CatalogueResult<Vec<Person>> {
    Ok(store.list_people()?)
}

pub fn person_details(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<Person> {
    store
        .get_person(id)?
        .ok_or_else(|| CatalogueError::person_not_found(id))
}

pub fn create_person(store: &dyn CatalogueStore, form: PersonForm) -> CatalogueResult<Person> {
    let mut person = person_from_form(0, form);
    validate_person(&person)?;
    person.id = store.insert_person(&person)?;
    info!("Created person {} '{}'", person.id, person.full_name());
    Ok(person)
}

pub fn update_person(
    store: &dyn CatalogueStore,
    id: i64,
    form: PersonForm,
) -> CatalogueResult<Person> {
    let person = person_from_form(id, form);
    validate_person(&person)?;
    if !store.update_person(&person)? {
        return Err(CatalogueError::person_not_found(id));
    }
    Ok(person)
}

/// Deleting a person also removes them from every movie.
pub fn delete_person(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<()> {
    if !store.delete_person(id)? {
        return Err(CatalogueError::person_not_found(id));
    }
    info!("Deleted person {}", id);
    Ok(())
}
