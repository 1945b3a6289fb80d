use crate::constants::BYTES_PER_LINE;
use crate::pixel::Dimensions;

/// Formats bytes as `0x..` literals, [`BYTES_PER_LINE`] per line.
///
/// Lines are separated by `",\n"`; the last byte has no trailing comma.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|line| {
            line.iter()
                .map(|byte| format!("0x{:02x}", byte))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn map_name(name: &str) -> String {
    format!("{}_map", name)
}

/// Renders a complete LVGL image source for `name`.
///
/// Only the 32-bit color depth branch carries data; the other branches stop
/// compilation with `#error NOT IMPLEMENTED`.
pub fn render_source(name: &str, dimensions: Dimensions, bytes: &[u8]) -> String {
    let attribute = name.to_uppercase();
    let map = map_name(name);
    let data = format_bytes(bytes);
    let Dimensions { width, height } = dimensions;
    let pixel_count = dimensions.pixel_count();

    format!(
        r#"#if defined(LV_LVGL_H_INCLUDE_SIMPLE)
#include "lvgl.h"
#else
#include "lvgl/lvgl.h"
#endif


#ifndef LV_ATTRIBUTE_MEM_ALIGN
#define LV_ATTRIBUTE_MEM_ALIGN
#endif

#ifndef LV_ATTRIBUTE_IMG_{attribute}
#define LV_ATTRIBUTE_IMG_{attribute}
#endif

const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST LV_ATTRIBUTE_IMG_{attribute} uint8_t {map}[] = {{
#if LV_COLOR_DEPTH == 1 || LV_COLOR_DEPTH == 8
  /*Pixel format: Red: 3 bit, Green: 3 bit, Blue: 2 bit*/

#error NOT IMPLEMENTED

#endif
#if LV_COLOR_DEPTH == 16 && LV_COLOR_16_SWAP == 0
  /*Pixel format: Red: 5 bit, Green: 6 bit, Blue: 5 bit*/

#error NOT IMPLEMENTED

#endif
#if LV_COLOR_DEPTH == 16 && LV_COLOR_16_SWAP != 0
  /*Pixel format: Red: 5 bit, Green: 6 bit, Blue: 5 bit BUT the 2 bytes are swapped*/

#error NOT IMPLEMENTED

#endif
#if LV_COLOR_DEPTH == 32
  /*Pixel format: Fix 0xFF: 8 bit, Red: 8 bit, Green: 8 bit, Blue: 8 bit*/
  /* actually it is other way around */
{data}
#endif
}};

const lv_img_dsc_t {name} = {{
  .header.cf = LV_IMG_CF_TRUE_COLOR_CHROMA_KEYED,
  .header.always_zero = 0,
  .header.reserved = 0,
  .header.w = {width},
  .header.h = {height},
  .data_size = {pixel_count} * LV_COLOR_SIZE / 8,
  .data = {map},
}};
"#
    )
}
