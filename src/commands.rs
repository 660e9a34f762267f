//! SSD1306 command opcodes and I2C control bytes.
//!
//! Every transmission to the controller starts with a one-byte control
//! marker: [`CONTROL_CMD`] frames a command byte, [`CONTROL_DATA`] frames a
//! stream of display RAM bytes. Commands that carry an argument send the
//! argument as a separately framed command byte.
//!
//! Opcodes with a `| 0x01`-style modifier bit are stored as the base value;
//! callers OR in the modifier (e.g. `SET_DISP | 0x01` turns the display on).

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Control byte preceding a command byte.
pub const CONTROL_CMD: u8 = 0x00;

/// Control byte preceding display RAM data.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Contrast control; followed by a level byte (0–255).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume displaying RAM content (entire-display-on disabled).
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal display; `| 0x01` inverts every pixel.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display off (sleep); `| 0x01` turns the panel on.
pub const SET_DISP: u8 = 0xAE;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Memory addressing mode; followed by 0x00 for horizontal mode.
pub const SET_MEM_ADDR: u8 = 0x20;

/// Column address window; followed by start and end columns.
pub const SET_COL_ADDR: u8 = 0x21;

/// Page address window; followed by start and end pages.
pub const SET_PAGE_ADDR: u8 = 0x22;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display RAM start line (line 0 encoded in the opcode itself).
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Segment remap; `| 0x01` maps column 127 to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio; followed by `height - 1`.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction; `| 0x08` scans from COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Vertical display offset; followed by the offset value.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// COM pin hardware configuration; followed by the layout byte.
pub const SET_COM_PIN_CFG: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving scheme
// ---------------------------------------------------------------------------

/// Display clock divide ratio / oscillator frequency; followed by one byte.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Precharge period; followed by one byte (depends on supply source).
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level; followed by one byte.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting; followed by enable/disable byte.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

// ---------------------------------------------------------------------------
// Horizontal scroll
// ---------------------------------------------------------------------------

/// Continuous horizontal scroll setup, rightward.
pub const SCROLL_HORIZ_RIGHT: u8 = 0x26;

/// Continuous horizontal scroll setup, leftward.
pub const SCROLL_HORIZ_LEFT: u8 = 0x27;

/// Stop any active scroll. RAM must be rewritten afterwards.
pub const SCROLL_DEACTIVATE: u8 = 0x2E;

/// Start the scroll configured by the preceding setup commands.
pub const SCROLL_ACTIVATE: u8 = 0x2F;

// ---------------------------------------------------------------------------
// Bus constants
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high).
pub const ALT_ADDRESS: u8 = 0x3D;
