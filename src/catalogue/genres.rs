use super::forms::GenreForm;
use super::{CatalogueError, CatalogueResult};
use crate::catalogue_store::validation::validate_genre;
use crate::catalogue_store::{CatalogueStore, Genre};
use tracing::info;

pub fn list_genres(store: &dyn CatalogueStore) -> CatalogueResult<Vec<Genre>> {
    Ok(store.list_genres()?)
}

pub fn genre_details(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<Genre> {
    store
        .get_genre(id)?
        .ok_or_else(|| CatalogueError::genre_not_found(id))
}

pub fn create_genre(store: &dyn CatalogueStore, form: GenreForm) -> CatalogueResult<Genre> {
    let mut genre = Genre {
        id: 0,
        name: form.genre_name.trim().to_string(),
    };
    validate_genre(&genre)?;
    genre.id = store.insert_genre(&genre)?;
    info!("Created genre {} '{}'", genre.id, genre.name);
    Ok(genre)
}

pub fn update_genre(
    store: &dyn CatalogueStore,
    id: i64,
    form: GenreForm,
) -> CatalogueResult<Genre> {
    let genre = Genre {
        id,
        name: form.genre_name.trim().to_string(),
    };
    validate_genre(&genre)?;
    if !store.update_genre(&genre)? {
        return Err(CatalogueError::genre_not_found(id));
    }
    Ok(genre)
}

/// Deleting a genre also unlinks it from every movie.
pub fn delete_genre(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<()> {
    if !store.delete_genre(id)? {
        return Err(CatalogueError::genre_not_found(id));
    }
    info!("Deleted genre {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue_store::SqliteCatalogueStore;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, SqliteCatalogueStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteCatalogueStore::new(dir.path().join("catalogue.db")).unwrap();
        (dir, store)
    }

    fn form(name: &str) -> GenreForm {
        GenreForm {
            genre_name: name.to_string(),
        }
    }

    #[test]
    fn genre_lifecycle() {
        let (_dir, store) = open_store();

        let created = create_genre(&store, form(" Noir ")).unwrap();
        assert_eq!(created.name, "Noir");
        assert_eq!(genre_details(&store, created.id).unwrap(), created);

        let renamed = update_genre(&store, created.id, form("Neo-noir")).unwrap();
        assert_eq!(list_genres(&store).unwrap(), vec![renamed]);

        delete_genre(&store, created.id).unwrap();
        assert!(matches!(
            genre_details(&store, created.id),
            Err(CatalogueError::NotFound { entity: "genre", .. })
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        let (_dir, store) = open_store();
        assert!(matches!(
            create_genre(&store, form("")),
            Err(CatalogueError::Validation(_))
        ));
        assert!(list_genres(&store).unwrap().is_empty());
    }

    #[test]
    fn missing_genre_is_not_found() {
        let (_dir, store) = open_store();
        assert!(matches!(
            update_genre(&store, 5, form("Drama")),
            Err(CatalogueError::NotFound { id: 5, .. })
        ));
        assert!(matches!(
            delete_genre(&store, 5),
            Err(CatalogueError::NotFound { id: 5, .. })
        ));
    }
}
