/// 按字符数截取预览文本，超长时追加省略号
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// 按空白切分的单词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
