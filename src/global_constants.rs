pub const APPLICATION_NAME: &str = "GraphParse";
pub const APPLICATION_CONFIG_DIR: &str = "graph-parse";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_PIPELINE: &str = "[PIPELINE]";
pub const LOG_TAG_UPLOADER: &str = "[UPLOADER]";
pub const LOG_TAG_FIREBASE: &str = "[FIREBASE]";
pub const LOG_TAG_LOCAL_STORE: &str = "[LOCAL_STORE]";
pub const LOG_TAG_REPORTER: &str = "[REPORTER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const FIREBASE_STORAGE_API_URL: &str = "https://firebasestorage.googleapis.com";
pub const DEFAULT_FIREBASE_BUCKET: &str = "graphparse.firebasestorage.app";
pub const GS_URL_SCHEME: &str = "gs://";
pub const DEFAULT_OBJECT_PREFIX: &str = "images";
pub const DEFAULT_JPEG_QUALITY: u8 = 80;
pub const LOCAL_STORE_FALLBACK_DIR: &str = "graph-parse-uploads";

pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";
pub const JPEG_FILE_EXTENSION: &str = "jpg";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PROMPT_CAPTURE: &str = "Tap to Capture: press Enter (or type anything) to capture, or type q to quit";
pub const PROMPT_IMAGE_PATH: &str = "Image file to capture (leave empty to cancel):";

pub const USER_MESSAGE_UPLOADING: &str = "Uploading...";
pub const USER_MESSAGE_UPLOADED: &str = "Image Uploaded!";
pub const USER_MESSAGE_CANCELLED: &str = "Capture cancelled.";
pub const USER_MESSAGE_FAILED: &str = "Upload failed, ready for next capture.";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  GraphParse                                            ║
║                                                        ║
║  We'll turn your sketch into a graph.                  ║
║                                                        ║
║  Press Enter to capture an image                       ║
║  Type q (or Ctrl+D) to exit                            ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
