/// 按两位一组拼接分行代码：`("123456", "-")` → `12-34-56`
pub fn formatted_sort_code(code: &str, separator: &str) -> String {
    let chars: Vec<char> = code.chars().filter(|ch| !ch.is_whitespace()).collect();
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}
