use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::side::Side;

/// The persisted state of reconciling one document against another: where
/// the originals came from, which edition of each is the latest and where
/// the last session left its cursors.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EditingJob {
    pub name: String,
    pub editing_file: PathBuf,
    pub source_file: PathBuf,
    pub latest_edit_file: PathBuf,
    pub latest_source_file: PathBuf,
    pub latest_edition: u32,
    pub last_editing_index: usize,
    pub last_source_index: usize,
}

impl EditingJob {
    /// A job that hasn't been worked on yet; edition 0 is the copy of the
    /// originals.
    pub fn new(
        editing_file: PathBuf,
        source_file: PathBuf,
        latest_edit_file: PathBuf,
        latest_source_file: PathBuf,
    ) -> Self {
        Self {
            name: Self::name_for(&editing_file, &source_file),
            editing_file,
            source_file,
            latest_edit_file,
            latest_source_file,
            latest_edition: 0,
            last_editing_index: 0,
            last_source_index: 0,
        }
    }

    /// `edit_<edit stem>_by_<source stem>`
    pub fn name_for(editing_file: &Path, source_file: &Path) -> String {
        format!("edit_{}_by_{}", stem(editing_file), stem(source_file))
    }

    pub fn latest_file(&self, side: Side) -> &Path {
        match side {
            Side::Edit => &self.latest_edit_file,
            Side::Source => &self.latest_source_file,
        }
    }

    pub fn set_latest_file(&mut self, side: Side, path: PathBuf) {
        match side {
            Side::Edit => self.latest_edit_file = path,
            Side::Source => self.latest_source_file = path,
        }
    }

    /// File name of the given edition of one side, `<edition>_<basename>`.
    /// When both originals share a basename the source side is told apart
    /// with a `source_` prefix so that the editions don't overwrite each
    /// other.
    pub fn edition_file_name(&self, side: Side, edition: u32) -> String {
        edition_file_name(&self.editing_file, &self.source_file, side, edition)
    }
}

pub(super) fn edition_file_name(
    editing_file: &Path,
    source_file: &Path,
    side: Side,
    edition: u32,
) -> String {
    let edit_name = basename(editing_file);
    let source_name = basename(source_file);

    match side {
        Side::Edit => format!("{edition}_{edit_name}"),
        Side::Source if source_name == edit_name => format!("{edition}_source_{source_name}"),
        Side::Source => format!("{edition}_{source_name}"),
    }
}

fn stem(path: &Path) -> String { lossy(path.file_stem()) }

fn basename(path: &Path) -> String { lossy(path.file_name()) }

fn lossy(name: Option<&OsStr>) -> String {
    name.map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("/books/draft.txt", "/books/original.txt", "edit_draft_by_original")]
    #[test_case("draft.md", "scans/ocr.txt", "edit_draft_by_ocr")]
    #[test_case("chapter.1.txt", "chapter.1.src", "edit_chapter.1_by_chapter.1")]
    fn job_names(edit: &str, source: &str, expected: &str) {
        assert_eq!(EditingJob::name_for(Path::new(edit), Path::new(source)), expected);
    }

    #[test]
    fn edition_file_names() {
        let job = EditingJob::new(
            "/a/draft.txt".into(),
            "/b/original.txt".into(),
            "/t/0_draft.txt".into(),
            "/t/0_original.txt".into(),
        );

        assert_eq!(job.edition_file_name(Side::Edit, 3), "3_draft.txt");
        assert_eq!(job.edition_file_name(Side::Source, 3), "3_original.txt");
    }

    #[test]
    fn edition_file_names_with_same_basename_dont_collide() {
        let job = EditingJob::new(
            "/mine/story.txt".into(),
            "/theirs/story.txt".into(),
            "/t/0_story.txt".into(),
            "/t/0_source_story.txt".into(),
        );

        assert_eq!(job.edition_file_name(Side::Edit, 1), "1_story.txt");
        assert_eq!(job.edition_file_name(Side::Source, 1), "1_source_story.txt");
    }

    #[test]
    fn serialized_record_lists_every_field() {
        let job = EditingJob::new(
            "/a/draft.txt".into(),
            "/b/original.txt".into(),
            "/t/0_draft.txt".into(),
            "/t/0_original.txt".into(),
        );

        insta::assert_snapshot!(serde_yaml::to_string(&job).unwrap(), @r"
        name: edit_draft_by_original
        editing_file: /a/draft.txt
        source_file: /b/original.txt
        latest_edit_file: /t/0_draft.txt
        latest_source_file: /t/0_original.txt
        latest_edition: 0
        last_editing_index: 0
        last_source_index: 0
        ");
    }
}
