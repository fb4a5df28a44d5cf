use crate::error::{ReleaseError, Result};
use crate::github::{CreatedRelease, NewRelease, ReleaseHost};
use std::cell::RefCell;

/// A call received by [MockReleaseHost]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    CreateRelease {
        owner: String,
        project: String,
        release: NewRelease,
    },
    UploadAsset {
        owner: String,
        project: String,
        release_id: u64,
        file_name: String,
        contents: Vec<u8>,
    },
}

/// Mock release host that records calls instead of talking to GitHub
pub struct MockReleaseHost {
    release_id: u64,
    create_error: Option<String>,
    upload_error: Option<(String, String)>,
    calls: RefCell<Vec<HostCall>>,
}

impl MockReleaseHost {
    pub fn new() -> Self {
        MockReleaseHost {
            release_id: 1,
            create_error: None,
            upload_error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Id assigned to created releases
    pub fn with_release_id(mut self, id: u64) -> Self {
        self.release_id = id;
        self
    }

    /// Reject every release creation
    pub fn fail_create(&mut self, reason: impl Into<String>) {
        self.create_error = Some(reason.into());
    }

    /// Reject uploads of the named file
    pub fn fail_upload(&mut self, file_name: impl Into<String>, reason: impl Into<String>) {
        self.upload_error = Some((file_name.into(), reason.into()));
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Names of uploaded files, in upload order
    pub fn uploaded_files(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::UploadAsset { file_name, .. } => Some(file_name.clone()),
                HostCall::CreateRelease { .. } => None,
            })
            .collect()
    }
}

impl Default for MockReleaseHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockReleaseHost {
    fn create_release(
        &self,
        owner: &str,
        project: &str,
        release: &NewRelease,
    ) -> Result<CreatedRelease> {
        self.calls.borrow_mut().push(HostCall::CreateRelease {
            owner: owner.to_string(),
            project: project.to_string(),
            release: release.clone(),
        });

        if let Some(reason) = &self.create_error {
            return Err(ReleaseError::publish(reason.clone()));
        }

        Ok(CreatedRelease {
            id: self.release_id,
            tag_name: release.tag_name.clone(),
            html_url: None,
        })
    }

    fn upload_asset(
        &self,
        owner: &str,
        project: &str,
        release_id: u64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::UploadAsset {
            owner: owner.to_string(),
            project: project.to_string(),
            release_id,
            file_name: file_name.to_string(),
            contents,
        });

        match &self.upload_error {
            Some((name, reason)) if name == file_name => {
                Err(ReleaseError::asset(file_name, reason.clone()))
            }
            _ => Ok(()),
        }
    }
}
