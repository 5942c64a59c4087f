//! 文件输入读取

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::images::ImageError;

/// 用户在 `<input type="file">` 中选择的文件
pub struct SelectedFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// 读取输入框中第一个文件的全部内容
///
/// 未选择文件时返回 `Ok(None)`。
pub async fn read_first_file(input: &HtmlInputElement) -> Result<Option<SelectedFile>, ImageError> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ImageError::Read(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(Some(SelectedFile {
        bytes,
        content_type: file.type_(),
    }))
}
