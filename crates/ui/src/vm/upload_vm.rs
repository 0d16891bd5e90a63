use scholora_core::model::LessonSession;

/// Display snapshot of the upload/select page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadVm {
    pub uploaded_name: Option<String>,
    pub selected_name: Option<String>,
    pub preview: Option<String>,
    pub processing: bool,
}

#[must_use]
pub fn map_upload(session: &LessonSession) -> UploadVm {
    let artifact = session.artifact();
    UploadVm {
        uploaded_name: artifact
            .filter(|a| a.is_upload())
            .map(|a| a.display_name().to_owned()),
        selected_name: artifact.map(|a| a.display_name().to_owned()),
        preview: artifact
            .and_then(|a| a.reference())
            .map(|r| r.as_str().to_owned()),
        processing: session.is_processing(),
    }
}

#[cfg(test)]
mod tests {
    use scholora_core::model::{ArtifactRef, UploadedFile};
    use scholora_core::time::fixed_now;

    use super::*;

    #[test]
    fn empty_session_has_nothing_to_preview() {
        let vm = map_upload(&LessonSession::new(fixed_now()));
        assert_eq!(vm, UploadVm::default());
    }

    #[test]
    fn catalog_pick_replaces_upload_in_preview() {
        let mut session = LessonSession::new(fixed_now());
        session.select_file(
            UploadedFile::new("/tmp/notes.pdf"),
            ArtifactRef::new("file:///tmp/notes.pdf"),
        );
        assert_eq!(map_upload(&session).uploaded_name.as_deref(), Some("notes.pdf"));

        session.select_title("BERT", Some(ArtifactRef::new("/bert.pdf")));
        let vm = map_upload(&session);
        assert_eq!(vm.uploaded_name, None);
        assert_eq!(vm.selected_name.as_deref(), Some("BERT"));
        assert_eq!(vm.preview.as_deref(), Some("/bert.pdf"));
    }
}
