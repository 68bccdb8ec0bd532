// Document service - Use cases for folders and the documents filed in them
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::document::{Document, DocumentDueDate, DocumentNew};
use crate::domain::folder::{Folder, FolderNew, FolderNewDescription, FolderNewName};
use std::sync::Arc;

#[derive(Clone)]
pub struct DocumentService {
    api: Arc<dyn BookkeepingApi>,
}

impl DocumentService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    pub async fn list_folders(&self) -> anyhow::Result<Vec<Folder>> {
        self.api.list_folders().await
    }

    /// Folder and its documents, fetched side by side.
    pub async fn folder_with_documents(
        &self,
        folder_id: &str,
    ) -> anyhow::Result<(Folder, Vec<Document>)> {
        let (folder, documents) = futures::try_join!(
            self.api.get_folder(folder_id),
            self.api.list_documents(folder_id)
        )?;
        Ok((folder, documents))
    }

    pub async fn create_folder(&self, form: &FolderNew) -> anyhow::Result<Folder> {
        self.api.create_folder(form).await
    }

    pub async fn rename_folder(&self, folder_id: &str, form: &FolderNewName) -> anyhow::Result<Folder> {
        self.api.rename_folder(folder_id, form).await
    }

    pub async fn redescribe_folder(
        &self,
        folder_id: &str,
        form: &FolderNewDescription,
    ) -> anyhow::Result<Folder> {
        self.api.redescribe_folder(folder_id, form).await
    }

    pub async fn set_folder_active(&self, folder_id: &str, active: bool) -> anyhow::Result<Folder> {
        self.api.set_folder_active(folder_id, active).await
    }

    pub async fn get_document(&self, document_id: &str) -> anyhow::Result<Document> {
        self.api.get_document(document_id).await
    }

    pub async fn create_document(
        &self,
        folder_id: &str,
        form: &DocumentNew,
    ) -> anyhow::Result<Document> {
        self.api.create_document(folder_id, form).await
    }

    pub async fn set_due_date(
        &self,
        document_id: &str,
        form: &DocumentDueDate,
    ) -> anyhow::Result<Document> {
        self.api.set_document_due_date(document_id, form).await
    }

    pub async fn set_document_active(
        &self,
        document_id: &str,
        active: bool,
    ) -> anyhow::Result<Document> {
        self.api.set_document_active(document_id, active).await
    }
}
