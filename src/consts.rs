// src/consts.rs

// Input directory conventions
pub const DATA_DIR: &str = "data";
pub const INDEX_FILE: &str = "index.txt";
pub const TABLE_EXT: &str = "csv";
pub const DOCUMENT_EXT: &str = "pdf";

// PDF line heuristic: "name - province - ingredients - description"
pub const SEGMENT_SEP: &str = " - ";
pub const MIN_SEGMENTS: usize = 4;

// CSV header columns (matched case-insensitively)
pub const COL_NAME: &str = "name";
pub const COL_PROVINCE: &str = "province";
pub const COL_INGREDIENTS: &str = "ingredients";
pub const COL_DESCRIPTION: &str = "description";
pub const COL_IMAGE_PATH: &str = "image_path";

// Defaults for absent fields
pub const UNKNOWN_PROVINCE: &str = "Unknown";

// UI strings. The catalog itself is Thai, so the user-facing surface is too.
pub const APP_TITLE: &str = "อาหารพื้นถิ่นไทย 🍲";
pub const PROVINCE_HEADING: &str = "เลือกจังหวัด"; // "choose a province"
pub const ALL_PROVINCES: &str = "ทั้งหมด"; // the "all" sentinel
pub const LABEL_PROVINCE: &str = "จังหวัด"; // "province"
pub const LABEL_INGREDIENTS: &str = "ส่วนผสม"; // "ingredients"
pub const NAME_UNSPECIFIED: &str = "ไม่ระบุชื่อ"; // "name unspecified"
pub const IMAGE_NOT_FOUND: &str = "ไม่พบรูปภาพ"; // "image not found"
pub const NO_DATA: &str = "ไม่พบข้อมูลอาหาร"; // "no dish data found"

// Rendering
pub const IMAGE_MAX_WIDTH: f32 = 480.0;
