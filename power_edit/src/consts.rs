pub const APP_DIRECTORY_NAME: &str = ".powerEdit";
pub const CONFIG_FILE_NAME: &str = "config.yml";
pub const JOBS_DIRECTORY_NAME: &str = "jobs";
pub const TEXTS_DIRECTORY_NAME: &str = "texts";

pub const JOB_FILE_EXTENSION: &str = "yml";
pub const MODIFIED_FILE_PREFIX: &str = "modified_";

pub const DEFAULT_CONTEXT_RADIUS: usize = word_align::DEFAULT_CONTEXT_RADIUS;
