//! 文本转 PDF 核心逻辑
//!
//! 排版规则：按 `\n` 切分为行，每行左对齐画在固定左边距处，行距固定；
//! 基线落到下边距以下时换页。单行超过 200 字符截断，行内不做自动换行。

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::AppError;

// A4 纵向页面，单位 pt（与排版参数一致，转 Mm 只在落笔时发生）
const PAGE_WIDTH_PT: f64 = 595.275_6;
const PAGE_HEIGHT_PT: f64 = 841.889_76;
/// 四周边距
const MARGIN_PT: f64 = 40.0;
/// 行距
const LINE_HEIGHT_PT: f64 = 12.0;
/// 字号（Helvetica）
const FONT_SIZE_PT: f64 = 12.0;
/// 单行最大字符数，超出部分截断
const MAX_LINE_CHARS: usize = 200;

const PT_TO_MM: f64 = 25.4 / 72.0;

fn mm(pt: f64) -> Mm {
    Mm((pt * PT_TO_MM) as _)
}

/// 截断到 200 字符（按字符而非字节，避免切断多字节字符）。
fn truncate_line(line: &str) -> &str {
    match line.char_indices().nth(MAX_LINE_CHARS) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// 把输入文本切分并分配到各页。
///
/// 首行基线位于 `page_height - margin`，每行下移一个行距；
/// 基线低于下边距时开新页。
fn paginate(text: &str) -> Vec<Vec<&str>> {
    let top = PAGE_HEIGHT_PT - MARGIN_PT;
    let mut pages: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut y = top;

    for line in text.split('\n') {
        if y < MARGIN_PT {
            pages.push(std::mem::take(&mut current));
            y = top;
        }
        current.push(truncate_line(line));
        y -= LINE_HEIGHT_PT;
    }
    pages.push(current);
    pages
}

/// 把文本渲染为 PDF 字节。
pub fn render_text(text: &str) -> Result<Vec<u8>, AppError> {
    let pages = paginate(text);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "utility-backend",
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (index, lines) in pages.iter().enumerate() {
        if index > 0 {
            let (page, layer_index) =
                doc.add_page(mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
        }

        let mut y = PAGE_HEIGHT_PT - MARGIN_PT;
        for line in lines {
            layer.use_text(*line, FONT_SIZE_PT as _, mm(MARGIN_PT), mm(y), &font);
            y -= LINE_HEIGHT_PT;
        }
    }

    doc.save_to_bytes().map_err(|e| AppError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{paginate, render_text, truncate_line};

    // A4 下边距 40pt、行距 12pt：每页最多 64 行，第 65 行进入下一页。
    const LINES_PER_PAGE: usize = 64;

    #[test]
    fn short_text_stays_on_one_page() {
        let pages = paginate("line1\nline2");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], vec!["line1", "line2"]);
    }

    #[test]
    fn page_breaks_after_page_is_full() {
        let full = vec!["x"; LINES_PER_PAGE].join("\n");
        assert_eq!(paginate(&full).len(), 1);

        let overflow = vec!["x"; LINES_PER_PAGE + 1].join("\n");
        let pages = paginate(&overflow);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), LINES_PER_PAGE);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn long_line_truncates_at_200_chars() {
        let long = "a".repeat(300);
        assert_eq!(truncate_line(&long).len(), 200);

        let exact = "b".repeat(200);
        assert_eq!(truncate_line(&exact), exact);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let line = "界".repeat(300);
        let truncated = truncate_line(&line);
        assert_eq!(truncated.chars().count(), 200);
    }

    #[test]
    fn output_is_a_pdf_document() {
        let bytes = render_text("line1\nline2").expect("render");
        assert!(bytes.starts_with(b"%PDF"));
        // 两页文档应明显大于单页
        let two_pages = render_text(&vec!["x"; LINES_PER_PAGE + 1].join("\n")).expect("render");
        assert!(two_pages.len() > bytes.len());
    }
}
