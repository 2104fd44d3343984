#![allow(dead_code)]

use sous_core::{Cookbook, CookbookBuilder};
use tempfile::TempDir;

/// A typical assistant answer with formal step markers.
pub const TOMATO_PASTA: &str = "토마토 파스타 레시피를 알려드릴게요!

재료:
- 파스타면 200g
- 토마토 소스 1컵
- 마늘 3쪽

Step 1: 끓는 물에 소금을 넣고 면을 10분 삶아주세요.
Step 2: 팬에 올리브유를 두르고 마늘을 2분 볶아주세요.
Step 3: 토마토 소스를 넣고 5분 끓인 뒤 면과 섞어주세요.

맛있게 드세요!";

/// Helper function to create a cookbook in a temporary directory.
pub async fn create_test_cookbook() -> (TempDir, Cookbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let cookbook = CookbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create cookbook");
    (temp_dir, cookbook)
}
