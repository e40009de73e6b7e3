pub mod note_repository;
