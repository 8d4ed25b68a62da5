pub const BLOCK1_INPUT: &str = r"
    - x
    - y
";
pub const BLOCK2_INPUT: &str = r"
- x
- y
";
pub const BLOCK_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC";
pub const SEQ_PLAIN_INPUT: &str = r"
  - x
   - y
";
pub const SEQ_PLAIN2_INPUT: &str = r"
- x - y
";
pub const SEQ_PLAIN_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x - y
-SEQ
-DOC";
pub const SEQ_TAGGED_INPUT: &str = r"
- !!int 1
- !!int -2
";
pub const SEQ_TAGGED_EVENTS: &str = r"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:int> :1
=VAL <tag:yaml.org,2002:int> :-2
-SEQ
-DOC";
pub const BLOCK_ERR_INPUT: &str = r"
  - x
 - y
";
pub const BLOCK_ERR_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
-SEQ
-DOC
ERR";
pub const WRONG_SEQ_INDENT_INPUT: &str = r"
a:
  - b
 - c
";
pub const WRONG_SEQ_INDENT_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+SEQ
=VAL :b
-SEQ
ERR";
pub const SEQ_NO_MINUS_INPUT: &str = r"
map:
 - a
 c
";
pub const SEQ_NO_MINUS_EVENTS: &str = r"
+DOC
+MAP
=VAL :map
+SEQ
=VAL :a
ERR";
pub const NESTED_SEQ_INPUT: &str = r"
- - a
  - b
- c
";
pub const NESTED_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+SEQ
=VAL :a
=VAL :b
-SEQ
=VAL :c
-SEQ
-DOC";
pub const ANCHOR_SEQ_INPUT: &str = r"
- &a x
- *a
";
pub const ANCHOR_SEQ_EVENTS: &str = r"
+DOC
+SEQ
=VAL &a :x
=ALI *a
-SEQ
-DOC";

pub const BLOCK_MAP_INPUT: &str = r"
a: b
c: d
";
pub const BLOCK_MAP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
=VAL :c
=VAL :d
-MAP
-DOC";
pub const NESTED_MAP_INPUT: &str = r"
a:
  b: c
d: e
";
pub const NESTED_MAP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+MAP
=VAL :b
=VAL :c
-MAP
=VAL :d
=VAL :e
-MAP
-DOC";
pub const INDENTLESS_SEQ_INPUT: &str = r"
a:
- b
- c
d: e
";
pub const INDENTLESS_SEQ_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+SEQ
=VAL :b
=VAL :c
-SEQ
=VAL :d
=VAL :e
-MAP
-DOC";
pub const COMPLEX_KEY_INPUT: &str = r"
? a
: b
";
pub const COMPLEX_KEY_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
-MAP
-DOC";
pub const COMPLEX_SEQ_KEY_INPUT: &str = r"
? - a
: b
";
pub const COMPLEX_SEQ_KEY_EVENTS: &str = r"
+DOC
+MAP
+SEQ
=VAL :a
-SEQ
=VAL :b
-MAP
-DOC";
pub const EMPTY_VALUES_INPUT: &str = r"
a:
b:
";
pub const EMPTY_VALUES_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :
=VAL :b
=VAL :
-MAP
-DOC";
pub const MAP_ERR_INPUT: &str = r"
a: b: c
";
pub const MAP_ERR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
ERR";
pub const MAP_TAB_ERR_INPUT: &str = "
a:
\tb: c
";
pub const MAP_TAB_ERR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
ERR";

pub const PLAIN_MULTI_INPUT: &str = r"
a
  b
";
pub const PLAIN_MULTI_EVENTS: &str = r"
+DOC
=VAL :a b
-DOC";
pub const PLAIN_MULTI_VALUE_INPUT: &str = r"
key: a
  b

  c
";
pub const PLAIN_MULTI_VALUE_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
=VAL :a b\nc
-MAP
-DOC";

pub const LITERAL_INPUT: &str = r"
a: |
  line1
  line2
";
pub const LITERAL_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |line1\nline2\n
-MAP
-DOC";
pub const LITERAL_KEEP_INPUT: &str = r"
a: |+
  x

b: c
";
pub const LITERAL_KEEP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |x\n\n
=VAL :b
=VAL :c
-MAP
-DOC";
pub const LITERAL_STRIP_INPUT: &str = r"
a: |-
  x

";
pub const LITERAL_STRIP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |x
-MAP
-DOC";
pub const LITERAL_INDENT_INPUT: &str = r"
- |1
  x
";
pub const LITERAL_INDENT_EVENTS: &str = r"
+DOC
+SEQ
=VAL | x\n
-SEQ
-DOC";
pub const FOLDED_INPUT: &str = r"
>
 a
 b

 c
";
pub const FOLDED_EVENTS: &str = r"
+DOC
=VAL >a b\nc\n
-DOC";
pub const FOLDED_MORE_INPUT: &str = r"
>
 a
  b
 c
";
pub const FOLDED_MORE_EVENTS: &str = r"
+DOC
=VAL >a\n b\nc\n
-DOC";
pub const BLOCK_SCALAR_ERR_INPUT: &str = r"
--- |0
 a
";
pub const BLOCK_SCALAR_ERR_EVENTS: &str = r"
+DOC ---
ERR";

pub const FLOW_SEQ_INPUT: &str = r"
[a, b, c]
";
pub const FLOW_SEQ2_INPUT: &str = r"
[a,
 b,
   c,]
";
pub const FLOW_SEQ_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
=VAL :c
-SEQ
-DOC";
pub const FLOW_MAP_INPUT: &str = r"
{a: b, c: d}
";
pub const FLOW_MAP_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :b
=VAL :c
=VAL :d
-MAP
-DOC";
pub const FLOW_PAIR_INPUT: &str = r"
[a: b]
";
pub const FLOW_PAIR_EVENTS: &str = r"
+DOC
+SEQ []
+MAP {}
=VAL :a
=VAL :b
-MAP
-SEQ
-DOC";
pub const FLOW_MAP_EMPTY_VALUE_INPUT: &str = r"
{a, b: c}
";
pub const FLOW_MAP_EMPTY_VALUE_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :
=VAL :b
=VAL :c
-MAP
-DOC";
pub const FLOW_NESTED_INPUT: &str = r"
[a, [b, c], {d: e}]
";
pub const FLOW_NESTED_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
+SEQ []
=VAL :b
=VAL :c
-SEQ
+MAP {}
=VAL :d
=VAL :e
-MAP
-SEQ
-DOC";
pub const FLOW_PROPS_INPUT: &str = r"
&s !!set {a, b}
";
pub const FLOW_PROPS_EVENTS: &str = r"
+DOC
+MAP {} &s <tag:yaml.org,2002:set>
=VAL :a
=VAL :
=VAL :b
=VAL :
-MAP
-DOC";
pub const FLOW_IN_BLOCK_INPUT: &str = r"
a: [b, c]
d: {e: f}
";
pub const FLOW_IN_BLOCK_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+SEQ []
=VAL :b
=VAL :c
-SEQ
=VAL :d
+MAP {}
=VAL :e
=VAL :f
-MAP
-MAP
-DOC";
pub const FLOW_SEQ_ERR_INPUT: &str = r"
[a, b
";
pub const FLOW_SEQ_ERR_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
ERR";
pub const FLOW_MAP_ERR_INPUT: &str = r"
{a: b
";
pub const FLOW_MAP_ERR_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :b
ERR";
pub const FLOW_EXTRA_END_INPUT: &str = r"
[a, b]]
";
pub const FLOW_EXTRA_END_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
-SEQ
-DOC
ERR";

pub const SQUOTE_STR_INPUT: &str = r"
'single'
";
pub const SQUOTE_STR_EVENTS: &str = r"
+DOC
=VAL 'single
-DOC";
pub const SQUOTE_ESCAPE_INPUT: &str = r"
'it''s'
";
pub const SQUOTE_ESCAPE_EVENTS: &str = r"
+DOC
=VAL 'it's
-DOC";
pub const SQUOTE_MULTI_INPUT: &str = r"
'a
  b'
";
pub const SQUOTE_MULTI_EVENTS: &str = r"
+DOC
=VAL 'a b
-DOC";
pub const DQUOTE_STR_INPUT: &str = r#"
"double"
"#;
pub const DQUOTE_STR_EVENTS: &str = r#"
+DOC
=VAL "double
-DOC"#;
pub const DQUOTE_ESCAPE_INPUT: &str = r#"
"a\tb\x41é\\"
"#;
pub const DQUOTE_ESCAPE_EVENTS: &str = r#"
+DOC
=VAL "a\tbAé\\
-DOC"#;
pub const DQUOTE_MULTI_INPUT: &str = r#"
"a
  b

  c"
"#;
pub const DQUOTE_MULTI_EVENTS: &str = r#"
+DOC
=VAL "a b\nc
-DOC"#;
pub const DQUOTE_LINE_JOIN_INPUT: &str = r#"
"a\
  b"
"#;
pub const DQUOTE_LINE_JOIN_EVENTS: &str = r#"
+DOC
=VAL "ab
-DOC"#;
pub const QUOTED_KEYS_INPUT: &str = r#"
'a': "b"
"c": 'd'
"#;
pub const QUOTED_KEYS_EVENTS: &str = r#"
+DOC
+MAP
=VAL 'a
=VAL "b
=VAL "c
=VAL 'd
-MAP
-DOC"#;
pub const DQUOTE_UNTERMINATED_INPUT: &str = r#"
key: "abc
"#;
pub const DQUOTE_UNTERMINATED_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
ERR";
pub const SQUOTE_UNTERMINATED_INPUT: &str = r"
'abc
";
pub const DQUOTE_BAD_ESCAPE_INPUT: &str = r#"
"\q"
"#;
pub const QUOTE_ERR_EVENTS: &str = r"
ERR";

pub const EMPTY_INPUT: &str = "";
pub const COMMENT_ONLY_INPUT: &str = r"
# just a comment
";
pub const EMPTY_EVENTS: &str = r"
+STR
-STR";
pub const EMPTY_DOC_INPUT: &str = r"
---
";
pub const EMPTY_DOC_EVENTS: &str = r"
+DOC ---
=VAL :
-DOC";
pub const FOOTER_INPUT: &str = r"
--- a
...
";
pub const FOOTER_EVENTS: &str = r"
+STR
+DOC ---
=VAL :a
-DOC ...
-STR";
pub const MULTI_DOC_INPUT: &str = r"
a
---
b
";
pub const MULTI_DOC_EVENTS: &str = r"
+DOC
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC";
pub const MULTI_DOC2_INPUT: &str = r"
--- a
--- b
";
pub const MULTI_DOC2_EVENTS: &str = r"
+DOC ---
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC";
pub const BARE_AFTER_END_INPUT: &str = r"
a
...
b
";
pub const BARE_AFTER_END_EVENTS: &str = r"
+DOC
=VAL :a
-DOC ...
+DOC
=VAL :b
-DOC";
pub const REPEATED_END_INPUT: &str = r"
a
...
...
";
pub const REPEATED_END_EVENTS: &str = r"
+STR
+DOC
=VAL :a
-DOC ...
-STR";
pub const REPEATED_END_MULTI_INPUT: &str = r"
---
a
...
...
---
b
";
pub const REPEATED_END_MULTI_EVENTS: &str = r"
+DOC ---
=VAL :a
-DOC ...
+DOC ---
=VAL :b
-DOC";
pub const YAML_DIRECTIVE_INPUT: &str = r"
%YAML 1.1
--- x
";
pub const UNKNOWN_DIRECTIVE_INPUT: &str = r"
%FOO bar baz
--- x
";
pub const DIRECTIVE_EVENTS: &str = r"
+DOC ---
=VAL :x
-DOC";
pub const TAG_DIRECTIVE_INPUT: &str = r"
%TAG !e! tag:example.com,2000:
--- !e!x v
";
pub const TAG_DIRECTIVE_EVENTS: &str = r"
+DOC ---
=VAL <tag:example.com,2000:x> :v
-DOC";
pub const LOCAL_TAG_INPUT: &str = r"
- !local a
- !<tag:example.com,2000:x%20y> b
";
pub const LOCAL_TAG_EVENTS: &str = r"
+DOC
+SEQ
=VAL <!local> :a
=VAL <tag:example.com,2000:x y> :b
-SEQ
-DOC";
pub const ERR_VERSION_INPUT: &str = r"
%YAML 2.0
---
";
pub const ERR_DUP_VERSION_INPUT: &str = r"
%YAML 1.1
%YAML 1.1
---
";
pub const ERR_DUP_TAG_INPUT: &str = r"
%TAG !x! tag:a,2000:
%TAG !x! tag:b,2000:
---
";
pub const ERR_NO_DOC_START_INPUT: &str = r"
%YAML 1.1
";
pub const ERR_DIRECTIVE_EVENTS: &str = r"
+STR
ERR";
pub const ERR_MULTILINE_KEY_INPUT: &str = r"
a
b: c
";
pub const ERR_MULTILINE_KEY_EVENTS: &str = r"
+STR
+DOC
=VAL :a b
ERR";
