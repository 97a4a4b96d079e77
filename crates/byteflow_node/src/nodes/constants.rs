// SPDX-License-Identifier: MIT OR Apache-2.0
//! Constant source nodes.
//!
//! None of these nodes have inputs. Each one holds an editable value and
//! publishes it on its outputs every time it is processed.

use super::kinds;
use crate::attribute::{Attribute, AttributeType, Attributes, SlotsMut};
use crate::decode::decode_byte_string;
use crate::node::Node;
use crate::record::{Fields, LoadError, Record};
use serde_json::json;

/// Map a float onto one that survives a record round-trip.
///
/// Records are JSON, which has no NaN or infinity. NaN becomes 0.0 and
/// infinities clamp to the largest finite value of the same sign.
pub fn finite_or_clamped(value: f32) -> f32 {
    if value.is_finite() {
        return value;
    }
    let replaced = if value.is_nan() { 0.0 } else { value.clamp(f32::MIN, f32::MAX) };
    tracing::warn!("Non-finite float {value} replaced with {replaced}");
    replaced
}

/// Parse a hexadecimal `u64`, with or without a `0x` prefix.
///
/// Surrounding whitespace and `_` separators are ignored.
pub fn parse_hex_u64(text: &str) -> Option<u64> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
        .replace('_', "");
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(&digits, 16).ok()
}

/// Outputs an empty buffer
#[derive(Debug, Clone)]
pub struct NullptrNode {
    attributes: Attributes,
}

impl NullptrNode {
    /// Create a new node
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![Attribute::output(AttributeType::Buffer, "Value")]),
        }
    }
}

impl Default for NullptrNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for NullptrNode {
    fn kind(&self) -> &'static str {
        kinds::NULLPTR
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        self.attributes.set_on_output(0, Vec::new());
    }
}

/// Outputs a zero-initialised buffer of configurable size
#[derive(Debug, Clone)]
pub struct BufferNode {
    attributes: Attributes,
    size: u32,
    buffer: Vec<u8>,
}

impl BufferNode {
    /// Create a new node with size 1
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![Attribute::output(AttributeType::Buffer, "Value")]),
            size: 1,
            buffer: Vec::new(),
        }
    }

    /// Configured buffer size
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Change the configured size. The buffer itself is reconciled on the
    /// next `process` call.
    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Replace the buffer contents
    pub fn set_buffer(&mut self, buffer: Vec<u8>) {
        self.buffer = buffer;
    }
}

impl Default for BufferNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for BufferNode {
    fn kind(&self) -> &'static str {
        kinds::BUFFER
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        // Truncation is permanent, growing zero-fills
        self.buffer.resize(self.size as usize, 0x00);
        self.attributes.set_on_output(0, self.buffer.clone());
    }

    fn serialize(&self) -> Record {
        json!({
            "size": self.size,
            "data": self.buffer,
        })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        let fields = Fields::new(record)?;
        let size = fields.u32("size")?;
        let buffer = fields.bytes("data")?;

        self.size = size;
        self.buffer = buffer;
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::DragValue::new(&mut self.size).speed(1.0).prefix("Size: "));
    }
}

/// Outputs the bytes described by an escaped string
#[derive(Debug, Clone)]
pub struct StringNode {
    attributes: Attributes,
    value: String,
}

impl StringNode {
    /// Create a new node with an empty string
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![Attribute::output(AttributeType::Buffer, "Value")]),
            value: String::new(),
        }
    }

    /// Source text, escapes not yet decoded
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the source text
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Default for StringNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for StringNode {
    fn kind(&self) -> &'static str {
        kinds::STRING
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        let bytes = decode_byte_string(&self.value).unwrap_or_else(|e| {
            tracing::warn!("Invalid byte string {:?}: {e}", self.value);
            Vec::new()
        });
        self.attributes.set_on_output(0, bytes);
    }

    fn serialize(&self) -> Record {
        json!({ "data": self.value })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        let value = Fields::new(record)?.string("data")?;
        self.value = value.to_string();
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::TextEdit::multiline(&mut self.value)
                .desired_width(150.0)
                .code_editor(),
        );
    }
}

/// Outputs a 64-bit unsigned integer
#[derive(Debug, Clone)]
pub struct IntegerNode {
    attributes: Attributes,
    value: u64,
}

impl IntegerNode {
    /// Create a new node holding 0
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![Attribute::output(AttributeType::Integer, "Value")]),
            value: 0,
        }
    }

    /// Current value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: u64) {
        self.value = value;
    }
}

impl Default for IntegerNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for IntegerNode {
    fn kind(&self) -> &'static str {
        kinds::INTEGER
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        self.attributes.set_on_output(0, self.value);
    }

    fn serialize(&self) -> Record {
        json!({ "data": self.value })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        self.value = Fields::new(record)?.u64("data")?;
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        // Edited as text: egui drag values go through f64 and lose bits above 2^53
        let mut text = format!("{:X}", self.value);
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(150.0)
                .code_editor(),
        );
        if response.changed() {
            if let Some(value) = parse_hex_u64(&text) {
                self.value = value;
            }
        }
    }
}

/// Outputs a 32-bit float
#[derive(Debug, Clone)]
pub struct FloatNode {
    attributes: Attributes,
    value: f32,
}

impl FloatNode {
    /// Create a new node holding 0.0
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![Attribute::output(AttributeType::Float, "Value")]),
            value: 0.0,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Replace the value. Non-finite values are replaced, see [`finite_or_clamped`].
    pub fn set_value(&mut self, value: f32) {
        self.value = finite_or_clamped(value);
    }
}

impl Default for FloatNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for FloatNode {
    fn kind(&self) -> &'static str {
        kinds::FLOAT
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        self.attributes.set_on_output(0, self.value);
    }

    fn serialize(&self) -> Record {
        json!({ "data": self.value })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        self.value = Fields::new(record)?.f32("data")?;
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::DragValue::new(&mut self.value).speed(0.01));
        self.value = finite_or_clamped(self.value);
    }
}

/// Outputs an RGBA color as four single-byte buffers
#[derive(Debug, Clone)]
pub struct Rgba8Node {
    attributes: Attributes,
    color: [f32; 4],
}

impl Rgba8Node {
    /// Create a new node holding transparent black
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(vec![
                Attribute::output(AttributeType::Buffer, "R"),
                Attribute::output(AttributeType::Buffer, "G"),
                Attribute::output(AttributeType::Buffer, "B"),
                Attribute::output(AttributeType::Buffer, "A"),
            ]),
            color: [0.0; 4],
        }
    }

    /// Normalized channels in r, g, b, a order
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Replace the color. Non-finite channels are replaced, see [`finite_or_clamped`].
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color.map(finite_or_clamped);
    }

    /// Convert a normalized channel to a byte, rounding toward zero.
    ///
    /// Values outside `[0, 1]` saturate, NaN maps to 0.
    pub fn channel_to_byte(channel: f32) -> u8 {
        (channel * 255.0) as u8
    }
}

impl Default for Rgba8Node {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Rgba8Node {
    fn kind(&self) -> &'static str {
        kinds::RGBA8
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {
        for (index, channel) in self.color.iter().enumerate() {
            self.attributes
                .set_on_output(index, vec![Self::channel_to_byte(*channel)]);
        }
    }

    fn serialize(&self) -> Record {
        let [r, g, b, a] = self.color;
        json!({
            "data": { "r": r, "g": g, "b": b, "a": a },
        })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        let fields = Fields::new(record)?;
        let data = fields.object("data")?;
        self.color = [data.f32("r")?, data.f32("g")?, data.f32("b")?, data.f32("a")?];
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.color_edit_button_rgba_unmultiplied(&mut self.color);
        self.color = self.color.map(finite_or_clamped);
    }
}

/// Annotation with no attributes
#[derive(Debug, Clone)]
pub struct CommentNode {
    attributes: Attributes,
    comment: String,
}

impl CommentNode {
    /// Create a new empty comment
    pub fn new() -> Self {
        Self {
            attributes: Attributes::default(),
            comment: String::new(),
        }
    }

    /// Comment text
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replace the comment text
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }
}

impl Default for CommentNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for CommentNode {
    fn kind(&self) -> &'static str {
        kinds::COMMENT
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn slots_mut(&mut self) -> SlotsMut<'_> {
        SlotsMut::new(&mut self.attributes)
    }

    fn process(&mut self) {}

    fn serialize(&self) -> Record {
        json!({ "comment": self.comment })
    }

    fn deserialize(&mut self, record: &Record) -> Result<(), LoadError> {
        let comment = Fields::new(record)?.string("comment")?;
        self.comment = comment.to_string();
        Ok(())
    }

    #[cfg(feature = "ui")]
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::TextEdit::multiline(&mut self.comment).desired_width(150.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeDirection;
    use crate::node::BoxedNode;
    use crate::registry::NodeRegistry;
    use crate::value::TypedValue;

    fn outputs(node: &dyn Node) -> Vec<TypedValue> {
        node.attributes()
            .outputs()
            .map(|(_, a)| a.value().clone())
            .collect()
    }

    fn shape(node: &dyn Node) -> Vec<(AttributeDirection, AttributeType)> {
        node.attributes()
            .iter()
            .map(|a| (a.direction(), a.ty()))
            .collect()
    }

    /// Save through JSON text and restore with the registry
    fn reload(node: &dyn Node) -> BoxedNode {
        let registry = NodeRegistry::with_basic_nodes().unwrap();
        let text = serde_json::to_string(&node.serialize()).unwrap();
        let record: Record = serde_json::from_str(&text).unwrap();
        registry.restore(node.kind(), &record).unwrap()
    }

    fn assert_roundtrip(mut node: BoxedNode) {
        let mut restored = reload(node.as_ref());
        node.process();
        restored.process();
        assert_eq!(outputs(node.as_ref()), outputs(restored.as_ref()));
        assert_eq!(shape(node.as_ref()), shape(restored.as_ref()));
    }

    #[test]
    fn test_nullptr_idempotent() {
        let mut node = NullptrNode::new();
        for _ in 0..3 {
            node.process();
            assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![])]);
        }
        assert!(node.deserialize(&json!({})).is_ok());
    }

    #[test]
    fn test_buffer_default_size() {
        let mut node = BufferNode::new();
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![0])]);
    }

    #[test]
    fn test_buffer_shrink_then_grow_zero_fills() {
        let mut node = BufferNode::new();
        node.set_buffer(vec![1, 2, 3, 4]);
        node.set_size(4);
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![1, 2, 3, 4])]);

        node.set_size(2);
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![1, 2])]);

        node.set_size(4);
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![1, 2, 0, 0])]);
    }

    #[test]
    fn test_buffer_length_always_matches_size() {
        let mut node = BufferNode::new();
        for size in [0u32, 7, 3, 16, 1] {
            node.set_size(size);
            node.process();
            let len = node.attributes().value(0).and_then(TypedValue::as_bytes).map(<[u8]>::len);
            assert_eq!(len, Some(size as usize));
        }
    }

    #[test]
    fn test_buffer_mismatched_record_reconciled() {
        let mut node = BufferNode::new();
        node.deserialize(&json!({ "size": 3, "data": [9, 9, 9, 9, 9] })).unwrap();
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![9, 9, 9])]);
    }

    #[test]
    fn test_buffer_missing_field() {
        let mut node = BufferNode::new();
        assert_eq!(
            node.deserialize(&json!({ "size": 3 })),
            Err(LoadError::MissingField("data".to_string()))
        );
        assert_eq!(
            node.deserialize(&json!({ "data": [] })),
            Err(LoadError::MissingField("size".to_string()))
        );
        assert_eq!(node.size(), 1);
    }

    #[test]
    fn test_string_decodes_escapes() {
        let mut node = StringNode::new();
        node.set_value("\\n");
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![b'\n'])]);

        node.set_value("MZ\\x90\\x00");
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![b'M', b'Z', 0x90, 0x00])]);
    }

    #[test]
    fn test_string_invalid_escape_outputs_empty() {
        let mut node = StringNode::new();
        node.set_value("abc\\q");
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Bytes(vec![])]);
    }

    #[test]
    fn test_integer_missing_field_keeps_value() {
        let mut node = IntegerNode::new();
        node.set_value(0x1234);
        assert_eq!(
            node.deserialize(&json!({ "value": 5 })),
            Err(LoadError::MissingField("data".to_string()))
        );
        assert!(matches!(
            node.deserialize(&json!({ "data": "5" })),
            Err(LoadError::FieldTypeMismatch { .. })
        ));
        assert_eq!(node.value(), 0x1234);
    }

    #[test]
    fn test_integer_output() {
        let mut node = IntegerNode::new();
        node.set_value(u64::MAX);
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::UnsignedInt(u64::MAX)]);
    }

    #[test]
    fn test_float_output() {
        let mut node = FloatNode::new();
        node.process();
        assert_eq!(outputs(&node), vec![TypedValue::Float(0.0)]);
    }

    #[test]
    fn test_rgba8_conversion() {
        let mut node = Rgba8Node::new();
        node.set_color([1.0, 0.5, 0.0, 1.0]);
        node.process();
        assert_eq!(
            outputs(&node),
            vec![
                TypedValue::Bytes(vec![255]),
                TypedValue::Bytes(vec![127]),
                TypedValue::Bytes(vec![0]),
                TypedValue::Bytes(vec![255]),
            ]
        );
    }

    #[test]
    fn test_rgba8_saturates() {
        assert_eq!(Rgba8Node::channel_to_byte(2.0), 255);
        assert_eq!(Rgba8Node::channel_to_byte(-1.0), 0);
        assert_eq!(Rgba8Node::channel_to_byte(f32::NAN), 0);
    }

    #[test]
    fn test_rgba8_stores_raw_channels() {
        let mut node = Rgba8Node::new();
        node.set_color([0.1, 0.2, 0.3, 0.4]);
        let record = node.serialize();
        assert_eq!(record["data"]["r"].as_f64().map(|v| v as f32), Some(0.1));
        assert_eq!(record["data"]["a"].as_f64().map(|v| v as f32), Some(0.4));
    }

    #[test]
    fn test_rgba8_missing_channel() {
        let mut node = Rgba8Node::new();
        node.set_color([1.0; 4]);
        let err = node
            .deserialize(&json!({ "data": { "r": 0.0, "g": 0.0, "b": 0.0 } }))
            .unwrap_err();
        assert_eq!(err, LoadError::MissingField("data.a".to_string()));
        assert_eq!(node.color(), [1.0; 4]);
    }

    #[test]
    fn test_comment_has_no_attributes() {
        let mut node = CommentNode::new();
        node.set_comment("header parsing starts here");
        node.process();
        assert!(node.attributes().is_empty());
        assert_eq!(node.serialize(), json!({ "comment": "header parsing starts here" }));
        assert!(matches!(
            node.deserialize(&json!({ "text": "x" })),
            Err(LoadError::MissingField(_))
        ));
    }

    #[test]
    fn test_roundtrip_all_variants() {
        let mut buffer = BufferNode::new();
        buffer.set_size(6);
        buffer.set_buffer(vec![0xDE, 0xAD, 0xBE, 0xEF]);

        let mut string = StringNode::new();
        string.set_value("line\\r\\n\\xff");

        let mut integer = IntegerNode::new();
        integer.set_value(0xDEAD_BEEF_CAFE_F00D);

        let mut float = FloatNode::new();
        float.set_value(0.1);

        let mut color = Rgba8Node::new();
        color.set_color([0.33, 0.5, 0.999, 1.0]);

        let mut comment = CommentNode::new();
        comment.set_comment("note");

        let nodes: Vec<BoxedNode> = vec![
            Box::new(NullptrNode::new()),
            Box::new(buffer),
            Box::new(string),
            Box::new(integer),
            Box::new(float),
            Box::new(color),
            Box::new(comment),
        ];
        for node in nodes {
            assert_roundtrip(node);
        }
    }

    #[test]
    fn test_float_roundtrip_is_exact() {
        for value in [0.1f32, 1.0e-38, 3.402_823_5e38, -0.0, 123.456] {
            let mut node = FloatNode::new();
            node.set_value(value);
            let mut restored = reload(&node);
            restored.process();
            let out = restored.attributes().value(0).and_then(TypedValue::as_f32);
            assert_eq!(out.map(f32::to_bits), Some(value.to_bits()));
        }
    }

    #[test]
    fn test_float_non_finite_still_roundtrips() {
        for (value, expected) in [
            (f32::NAN, 0.0),
            (f32::INFINITY, f32::MAX),
            (f32::NEG_INFINITY, f32::MIN),
        ] {
            let mut node = FloatNode::new();
            node.set_value(value);
            assert_eq!(node.value(), expected);
            let mut restored = reload(&node);
            restored.process();
            assert_eq!(restored.attributes().value(0), Some(&TypedValue::Float(expected)));
        }
    }

    #[test]
    fn test_float_out_of_range_record_keeps_value() {
        let mut node = FloatNode::new();
        node.set_value(2.5);
        assert!(matches!(
            node.deserialize(&json!({ "data": 1e39 })),
            Err(LoadError::FieldTypeMismatch { .. })
        ));
        assert!(node.deserialize(&json!({ "data": null })).is_err());
        assert_eq!(node.value(), 2.5);
    }

    #[test]
    fn test_rgba8_non_finite_channel_roundtrips() {
        let mut node = Rgba8Node::new();
        node.set_color([f32::NAN, 0.5, f32::INFINITY, 1.0]);
        assert_eq!(node.color(), [0.0, 0.5, f32::MAX, 1.0]);
        assert_roundtrip(Box::new(node));

        let mut node = Rgba8Node::new();
        let record = json!({ "data": { "r": 0.0, "g": -1e39, "b": 0.0, "a": 1.0 } });
        assert!(node.deserialize(&record).is_err());
        assert_eq!(node.color(), [0.0; 4]);
    }

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("FFFFFFFFFFFFFFFF"), Some(u64::MAX));
        assert_eq!(parse_hex_u64("0x20000000000001"), Some((1 << 53) + 1));
        assert_eq!(parse_hex_u64(" dead_beef "), Some(0xDEAD_BEEF));
        assert_eq!(parse_hex_u64(&format!("{:X}", u64::MAX - 1)), Some(u64::MAX - 1));
        assert_eq!(parse_hex_u64(""), None);
        assert_eq!(parse_hex_u64("0x"), None);
        assert_eq!(parse_hex_u64("10000000000000000"), None);
        assert_eq!(parse_hex_u64("xyz"), None);
    }

    #[test]
    fn test_registry_nodes_reject_inputs() {
        // Constants have no inputs, so every host write through the boxed node fails
        let registry = NodeRegistry::with_basic_nodes().unwrap();
        let mut node = registry.create(kinds::INTEGER).unwrap();
        assert!(matches!(
            node.set_input(0, TypedValue::UnsignedInt(1)),
            Err(crate::AttributeError::DirectionMismatch { index: 0, .. })
        ));
        let mut comment = registry.create(kinds::COMMENT).unwrap();
        assert!(matches!(
            comment.set_input(0, TypedValue::Empty),
            Err(crate::AttributeError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_shape_unchanged_by_process_and_deserialize() {
        let registry = NodeRegistry::with_basic_nodes().unwrap();
        for entry in registry.entries() {
            let mut node = entry.create();
            let before = shape(node.as_ref());
            node.process();
            let record = node.serialize();
            node.deserialize(&record).unwrap();
            node.process();
            assert_eq!(shape(node.as_ref()), before, "{}", entry.kind);
        }
    }
}
