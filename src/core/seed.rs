// 後端尚未提供資料前使用的示範資料

use crate::domain::model::Record;

pub fn users() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", "1")
            .with("name", "John Doe")
            .with("email", "john@example.com")
            .with("role", "artist")
            .with("status", "active"),
        Record::new()
            .with("id", "2")
            .with("name", "Jane Smith")
            .with("email", "jane@example.com")
            .with("role", "user")
            .with("status", "active"),
    ]
}

pub fn artworks() -> Vec<Record> {
    vec![
        artwork(1, "Abstract Dreams", "John Doe", "visual-art", "published", "2024-01-15T10:30:00Z"),
        artwork(2, "Urban Landscape", "Jane Smith", "design", "draft", "2024-02-10T11:15:00Z"),
        artwork(3, "Ethereal Dance", "John Doe", "multimedia", "pending", "2024-03-20T14:45:00Z"),
    ]
}

pub fn gallery() -> Vec<Record> {
    vec![
        gallery_item("1", "Abstract Dreams", "Visual Art", 1200, 45),
        gallery_item("2", "Urban Landscape", "Design", 800, 32),
        gallery_item("3", "Ethereal Dance", "Multimedia", 1500, 67),
    ]
}

fn artwork(
    id: i64,
    title: &str,
    artist: &str,
    category: &str,
    status: &str,
    created_at: &str,
) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("artist", artist)
        .with("category", category)
        .with("status", status)
        .with("created_at", created_at)
}

fn gallery_item(id: &str, title: &str, category: &str, views: u64, likes: u64) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("category", category)
        .with("views", views)
        .with("likes", likes)
}
