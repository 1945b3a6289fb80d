#![allow(dead_code)]

/// Wire bytes for a 2x1 image: a chroma key pixel, then B=0x10 G=0x20 R=0x30 opaque.
pub const TWO_PIXEL_WIRE: [u8; 8] = [0x00, 0xFF, 0x00, 0x00, 0x10, 0x20, 0x30, 0xFF];

/// A hand-written LVGL source laid out like the converter's output.
pub fn lvgl_source(width: u32, height: u32, payload: &str) -> String {
    format!(
        "#include \"lvgl/lvgl.h\"\n\
         const uint8_t img_test_map[] = {{\n\
         #if LV_COLOR_DEPTH == 16\n\
         #error NOT IMPLEMENTED\n\
         #endif\n\
         #if LV_COLOR_DEPTH == 32\n\
         \x20 /*Pixel format: Fix 0xFF: 8 bit, Red: 8 bit, Green: 8 bit, Blue: 8 bit*/\n\
         {payload}\n\
         #endif\n\
         }};\n\
         const lv_img_dsc_t img_test = {{\n\
         \x20 .header.cf = LV_IMG_CF_TRUE_COLOR_CHROMA_KEYED,\n\
         \x20 .header.w = {width},\n\
         \x20 .header.h = {height},\n\
         \x20 .data = img_test_map,\n\
         }};\n"
    )
}

pub fn hex_payload(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A 4x4 gradient that avoids both chroma-key special cases.
pub fn gradient_rgba() -> Vec<u8> {
    let mut data = Vec::new();
    for y in 0..4u8 {
        for x in 0..4u8 {
            data.extend_from_slice(&[x * 60 + 10, y * 60 + 10, 128, 255 - x * y]);
        }
    }
    data
}
