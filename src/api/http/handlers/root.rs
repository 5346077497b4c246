pub async fn index() -> &'static str {
    "It works"
}
