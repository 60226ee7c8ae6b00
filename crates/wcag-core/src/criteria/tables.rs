//! Versioned static WCAG tables.
//!
//! Each version is described cumulatively: the Level A list, then the
//! criteria each higher tier adds. A new WCAG edition gets its own
//! constants here; existing tables are never edited to describe it.

use crate::domain::WcagVersion;

/// `(criterion id, title, normative summary)`.
pub(crate) type CriterionRow = (&'static str, &'static str, &'static str);

/// `(criterion id, reference url)`.
pub(crate) type ResourceRow = (&'static str, &'static str);

pub(crate) struct VersionTables {
    pub level_a: &'static [CriterionRow],
    pub aa_additions: &'static [CriterionRow],
    pub aaa_additions: &'static [CriterionRow],
    /// Curated per-criterion references, appended after the templated links.
    pub curated_resources: &'static [ResourceRow],
}

pub(crate) static WCAG21: VersionTables = VersionTables {
    level_a: WCAG21_A,
    aa_additions: WCAG21_AA,
    aaa_additions: WCAG21_AAA,
    curated_resources: WCAG21_RESOURCES,
};

pub(crate) static WCAG22: VersionTables = VersionTables {
    level_a: WCAG22_A,
    aa_additions: WCAG22_AA,
    aaa_additions: WCAG22_AAA,
    curated_resources: WCAG22_RESOURCES,
};

pub(crate) fn for_version(version: WcagVersion) -> &'static VersionTables {
    match version {
        WcagVersion::V2_1 => &WCAG21,
        WcagVersion::V2_2 => &WCAG22,
    }
}

#[rustfmt::skip]
const WCAG21_A: &[CriterionRow] = &[
    ("1.1.1", "Non-text Content", "All non-text content has a text alternative that serves the equivalent purpose."),
    ("1.2.1", "Audio-only and Video-only (Prerecorded)", "Provide an alternative for prerecorded audio-only and video-only media."),
    ("1.2.2", "Captions (Prerecorded)", "Provide captions for all prerecorded audio content in synchronized media."),
    ("1.2.3", "Audio Description or Media Alternative (Prerecorded)", "Provide audio description or a media alternative for prerecorded video."),
    ("1.3.1", "Info and Relationships", "Information, structure, and relationships conveyed through presentation are programmatically determinable."),
    ("1.3.2", "Meaningful Sequence", "When sequence affects meaning, a correct reading sequence is programmatically determinable."),
    ("1.3.3", "Sensory Characteristics", "Instructions do not rely solely on shape, size, visual location, orientation, or sound."),
    ("1.4.1", "Use of Color", "Color is not the only visual means of conveying information."),
    ("1.4.2", "Audio Control", "Audio playing automatically for more than 3 seconds can be paused, stopped, or muted."),
    ("2.1.1", "Keyboard", "All functionality is operable through a keyboard interface."),
    ("2.1.2", "No Keyboard Trap", "Keyboard focus can always be moved away from any component using only the keyboard."),
    ("2.1.4", "Character Key Shortcuts", "Single-character shortcuts can be turned off, remapped, or are active only on focus."),
    ("2.2.1", "Timing Adjustable", "Users can turn off, adjust, or extend each time limit."),
    ("2.2.2", "Pause, Stop, Hide", "Moving, blinking, scrolling, or auto-updating content can be paused, stopped, or hidden."),
    ("2.3.1", "Three Flashes or Below Threshold", "Nothing flashes more than three times in any one-second period."),
    ("2.4.1", "Bypass Blocks", "A mechanism is available to bypass blocks of content repeated on multiple pages."),
    ("2.4.2", "Page Titled", "Web pages have titles that describe topic or purpose."),
    ("2.4.3", "Focus Order", "Focusable components receive focus in an order that preserves meaning and operability."),
    ("2.4.4", "Link Purpose (In Context)", "The purpose of each link can be determined from the link text or its context."),
    ("2.5.1", "Pointer Gestures", "Multipoint or path-based gestures have a single-pointer alternative."),
    ("2.5.2", "Pointer Cancellation", "Single-pointer functions can be aborted or undone."),
    ("2.5.3", "Label in Name", "The accessible name of a labelled component contains its visible label text."),
    ("2.5.4", "Motion Actuation", "Motion-operated functions have a UI alternative and can be disabled."),
    ("3.1.1", "Language of Page", "The default human language of each page is programmatically determinable."),
    ("3.2.1", "On Focus", "Receiving focus does not initiate a change of context."),
    ("3.2.2", "On Input", "Changing a setting does not automatically cause an unannounced change of context."),
    ("3.3.1", "Error Identification", "Input errors are identified and described to the user in text."),
    ("3.3.2", "Labels or Instructions", "Labels or instructions are provided when content requires user input."),
    ("4.1.1", "Parsing", "Markup has complete start and end tags, correct nesting, and unique ids."),
    ("4.1.2", "Name, Role, Value", "Name, role, states, and values of UI components are programmatically determinable."),
];

#[rustfmt::skip]
const WCAG21_AA: &[CriterionRow] = &[
    ("1.2.4", "Captions (Live)", "Provide captions for all live audio content in synchronized media."),
    ("1.2.5", "Audio Description (Prerecorded)", "Provide audio description for all prerecorded video content."),
    ("1.3.4", "Orientation", "Content does not restrict its view and operation to a single display orientation."),
    ("1.3.5", "Identify Input Purpose", "The purpose of input fields collecting user information is programmatically determinable."),
    ("1.4.3", "Contrast (Minimum)", "Text has a contrast ratio of at least 4.5:1 (3:1 for large text)."),
    ("1.4.4", "Resize Text", "Text can be resized up to 200 percent without loss of content or functionality."),
    ("1.4.5", "Images of Text", "Text is used to convey information rather than images of text."),
    ("1.4.10", "Reflow", "Content reflows without two-dimensional scrolling at 320 CSS pixels wide."),
    ("1.4.11", "Non-text Contrast", "UI components and graphical objects have a contrast ratio of at least 3:1."),
    ("1.4.12", "Text Spacing", "No loss of content occurs when users adjust text spacing."),
    ("1.4.13", "Content on Hover or Focus", "Additional content on hover or focus is dismissible, hoverable, and persistent."),
    ("2.4.5", "Multiple Ways", "More than one way is available to locate a page within a set of pages."),
    ("2.4.6", "Headings and Labels", "Headings and labels describe topic or purpose."),
    ("2.4.7", "Focus Visible", "Keyboard focus indicators are visible."),
    ("3.1.2", "Language of Parts", "The human language of each passage or phrase is programmatically determinable."),
    ("3.2.3", "Consistent Navigation", "Repeated navigation mechanisms occur in the same relative order."),
    ("3.2.4", "Consistent Identification", "Components with the same functionality are identified consistently."),
    ("3.3.3", "Error Suggestion", "Suggestions for correcting detected input errors are provided."),
    ("3.3.4", "Error Prevention (Legal, Financial, Data)", "Legal, financial, and data submissions are reversible, checked, or confirmed."),
    ("4.1.3", "Status Messages", "Status messages can be presented by assistive technologies without receiving focus."),
];

#[rustfmt::skip]
const WCAG21_AAA: &[CriterionRow] = &[
    ("1.2.6", "Sign Language (Prerecorded)", "Provide sign language interpretation for prerecorded audio content."),
    ("1.2.7", "Extended Audio Description (Prerecorded)", "Provide extended audio description where pauses are insufficient."),
    ("1.2.8", "Media Alternative (Prerecorded)", "Provide an alternative for all prerecorded synchronized media."),
    ("1.2.9", "Audio-only (Live)", "Provide an alternative for live audio-only content."),
    ("1.3.6", "Identify Purpose", "The purpose of UI components, icons, and regions is programmatically determinable."),
    ("1.4.6", "Contrast (Enhanced)", "Text has a contrast ratio of at least 7:1 (4.5:1 for large text)."),
    ("1.4.7", "Low or No Background Audio", "Prerecorded speech has little or no background audio."),
    ("1.4.8", "Visual Presentation", "Blocks of text support user-selected colors, width, spacing, and alignment."),
    ("1.4.9", "Images of Text (No Exception)", "Images of text are used only for decoration or where essential."),
    ("2.1.3", "Keyboard (No Exception)", "All functionality is operable through a keyboard without exception."),
    ("2.2.3", "No Timing", "Timing is not an essential part of the activity."),
    ("2.2.4", "Interruptions", "Interruptions can be postponed or suppressed by the user."),
    ("2.2.5", "Re-authenticating", "Data is preserved when an authenticated session expires."),
    ("2.2.6", "Timeouts", "Users are warned of inactivity timeouts that could cause data loss."),
    ("2.3.2", "Three Flashes", "Nothing flashes more than three times in any one-second period."),
    ("2.3.3", "Animation from Interactions", "Motion animation triggered by interaction can be disabled."),
    ("2.4.8", "Location", "Information about the user's location within a set of pages is available."),
    ("2.4.9", "Link Purpose (Link Only)", "The purpose of each link can be identified from the link text alone."),
    ("2.4.10", "Section Headings", "Section headings are used to organize the content."),
    ("2.5.5", "Target Size", "Pointer targets are at least 44 by 44 CSS pixels."),
    ("2.5.6", "Concurrent Input Mechanisms", "Content does not restrict use of available input modalities."),
    ("3.1.3", "Unusual Words", "A mechanism identifies definitions of unusual words and jargon."),
    ("3.1.4", "Abbreviations", "A mechanism identifies the expanded form of abbreviations."),
    ("3.1.5", "Reading Level", "Supplemental content is available when text requires advanced reading ability."),
    ("3.1.6", "Pronunciation", "A mechanism identifies pronunciation where meaning is ambiguous without it."),
    ("3.2.5", "Change on Request", "Changes of context are initiated only by user request."),
    ("3.3.5", "Help", "Context-sensitive help is available."),
    ("3.3.6", "Error Prevention (All)", "All submissions are reversible, checked, or confirmed."),
];

// 2.2 drops 4.1.1 and adds nine criteria; everything else is shared with 2.1.
#[rustfmt::skip]
const WCAG22_A: &[CriterionRow] = &[
    ("1.1.1", "Non-text Content", "All non-text content has a text alternative that serves the equivalent purpose."),
    ("1.2.1", "Audio-only and Video-only (Prerecorded)", "Provide an alternative for prerecorded audio-only and video-only media."),
    ("1.2.2", "Captions (Prerecorded)", "Provide captions for all prerecorded audio content in synchronized media."),
    ("1.2.3", "Audio Description or Media Alternative (Prerecorded)", "Provide audio description or a media alternative for prerecorded video."),
    ("1.3.1", "Info and Relationships", "Information, structure, and relationships conveyed through presentation are programmatically determinable."),
    ("1.3.2", "Meaningful Sequence", "When sequence affects meaning, a correct reading sequence is programmatically determinable."),
    ("1.3.3", "Sensory Characteristics", "Instructions do not rely solely on shape, size, visual location, orientation, or sound."),
    ("1.4.1", "Use of Color", "Color is not the only visual means of conveying information."),
    ("1.4.2", "Audio Control", "Audio playing automatically for more than 3 seconds can be paused, stopped, or muted."),
    ("2.1.1", "Keyboard", "All functionality is operable through a keyboard interface."),
    ("2.1.2", "No Keyboard Trap", "Keyboard focus can always be moved away from any component using only the keyboard."),
    ("2.1.4", "Character Key Shortcuts", "Single-character shortcuts can be turned off, remapped, or are active only on focus."),
    ("2.2.1", "Timing Adjustable", "Users can turn off, adjust, or extend each time limit."),
    ("2.2.2", "Pause, Stop, Hide", "Moving, blinking, scrolling, or auto-updating content can be paused, stopped, or hidden."),
    ("2.3.1", "Three Flashes or Below Threshold", "Nothing flashes more than three times in any one-second period."),
    ("2.4.1", "Bypass Blocks", "A mechanism is available to bypass blocks of content repeated on multiple pages."),
    ("2.4.2", "Page Titled", "Web pages have titles that describe topic or purpose."),
    ("2.4.3", "Focus Order", "Focusable components receive focus in an order that preserves meaning and operability."),
    ("2.4.4", "Link Purpose (In Context)", "The purpose of each link can be determined from the link text or its context."),
    ("2.5.1", "Pointer Gestures", "Multipoint or path-based gestures have a single-pointer alternative."),
    ("2.5.2", "Pointer Cancellation", "Single-pointer functions can be aborted or undone."),
    ("2.5.3", "Label in Name", "The accessible name of a labelled component contains its visible label text."),
    ("2.5.4", "Motion Actuation", "Motion-operated functions have a UI alternative and can be disabled."),
    ("3.1.1", "Language of Page", "The default human language of each page is programmatically determinable."),
    ("3.2.1", "On Focus", "Receiving focus does not initiate a change of context."),
    ("3.2.2", "On Input", "Changing a setting does not automatically cause an unannounced change of context."),
    ("3.2.6", "Consistent Help", "Help mechanisms repeated across pages occur in the same relative order."),
    ("3.3.1", "Error Identification", "Input errors are identified and described to the user in text."),
    ("3.3.2", "Labels or Instructions", "Labels or instructions are provided when content requires user input."),
    ("3.3.7", "Redundant Entry", "Previously entered information is auto-populated or available to select."),
    ("4.1.2", "Name, Role, Value", "Name, role, states, and values of UI components are programmatically determinable."),
];

#[rustfmt::skip]
const WCAG22_AA: &[CriterionRow] = &[
    ("1.2.4", "Captions (Live)", "Provide captions for all live audio content in synchronized media."),
    ("1.2.5", "Audio Description (Prerecorded)", "Provide audio description for all prerecorded video content."),
    ("1.3.4", "Orientation", "Content does not restrict its view and operation to a single display orientation."),
    ("1.3.5", "Identify Input Purpose", "The purpose of input fields collecting user information is programmatically determinable."),
    ("1.4.3", "Contrast (Minimum)", "Text has a contrast ratio of at least 4.5:1 (3:1 for large text)."),
    ("1.4.4", "Resize Text", "Text can be resized up to 200 percent without loss of content or functionality."),
    ("1.4.5", "Images of Text", "Text is used to convey information rather than images of text."),
    ("1.4.10", "Reflow", "Content reflows without two-dimensional scrolling at 320 CSS pixels wide."),
    ("1.4.11", "Non-text Contrast", "UI components and graphical objects have a contrast ratio of at least 3:1."),
    ("1.4.12", "Text Spacing", "No loss of content occurs when users adjust text spacing."),
    ("1.4.13", "Content on Hover or Focus", "Additional content on hover or focus is dismissible, hoverable, and persistent."),
    ("2.4.5", "Multiple Ways", "More than one way is available to locate a page within a set of pages."),
    ("2.4.6", "Headings and Labels", "Headings and labels describe topic or purpose."),
    ("2.4.7", "Focus Visible", "Keyboard focus indicators are visible."),
    ("2.4.11", "Focus Not Obscured (Minimum)", "A focused component is not entirely hidden by author-created content."),
    ("2.5.7", "Dragging Movements", "Dragging functionality has a single-pointer alternative without dragging."),
    ("2.5.8", "Target Size (Minimum)", "Pointer targets are at least 24 by 24 CSS pixels or sufficiently spaced."),
    ("3.1.2", "Language of Parts", "The human language of each passage or phrase is programmatically determinable."),
    ("3.2.3", "Consistent Navigation", "Repeated navigation mechanisms occur in the same relative order."),
    ("3.2.4", "Consistent Identification", "Components with the same functionality are identified consistently."),
    ("3.3.3", "Error Suggestion", "Suggestions for correcting detected input errors are provided."),
    ("3.3.4", "Error Prevention (Legal, Financial, Data)", "Legal, financial, and data submissions are reversible, checked, or confirmed."),
    ("3.3.8", "Accessible Authentication (Minimum)", "Authentication does not require a cognitive function test without an alternative."),
    ("4.1.3", "Status Messages", "Status messages can be presented by assistive technologies without receiving focus."),
];

#[rustfmt::skip]
const WCAG22_AAA: &[CriterionRow] = &[
    ("1.2.6", "Sign Language (Prerecorded)", "Provide sign language interpretation for prerecorded audio content."),
    ("1.2.7", "Extended Audio Description (Prerecorded)", "Provide extended audio description where pauses are insufficient."),
    ("1.2.8", "Media Alternative (Prerecorded)", "Provide an alternative for all prerecorded synchronized media."),
    ("1.2.9", "Audio-only (Live)", "Provide an alternative for live audio-only content."),
    ("1.3.6", "Identify Purpose", "The purpose of UI components, icons, and regions is programmatically determinable."),
    ("1.4.6", "Contrast (Enhanced)", "Text has a contrast ratio of at least 7:1 (4.5:1 for large text)."),
    ("1.4.7", "Low or No Background Audio", "Prerecorded speech has little or no background audio."),
    ("1.4.8", "Visual Presentation", "Blocks of text support user-selected colors, width, spacing, and alignment."),
    ("1.4.9", "Images of Text (No Exception)", "Images of text are used only for decoration or where essential."),
    ("2.1.3", "Keyboard (No Exception)", "All functionality is operable through a keyboard without exception."),
    ("2.2.3", "No Timing", "Timing is not an essential part of the activity."),
    ("2.2.4", "Interruptions", "Interruptions can be postponed or suppressed by the user."),
    ("2.2.5", "Re-authenticating", "Data is preserved when an authenticated session expires."),
    ("2.2.6", "Timeouts", "Users are warned of inactivity timeouts that could cause data loss."),
    ("2.3.2", "Three Flashes", "Nothing flashes more than three times in any one-second period."),
    ("2.3.3", "Animation from Interactions", "Motion animation triggered by interaction can be disabled."),
    ("2.4.8", "Location", "Information about the user's location within a set of pages is available."),
    ("2.4.9", "Link Purpose (Link Only)", "The purpose of each link can be identified from the link text alone."),
    ("2.4.10", "Section Headings", "Section headings are used to organize the content."),
    ("2.4.12", "Focus Not Obscured (Enhanced)", "No part of a focused component is hidden by author-created content."),
    ("2.4.13", "Focus Appearance", "Focus indicators are sufficiently large and have sufficient contrast."),
    ("2.5.5", "Target Size (Enhanced)", "Pointer targets are at least 44 by 44 CSS pixels."),
    ("2.5.6", "Concurrent Input Mechanisms", "Content does not restrict use of available input modalities."),
    ("3.1.3", "Unusual Words", "A mechanism identifies definitions of unusual words and jargon."),
    ("3.1.4", "Abbreviations", "A mechanism identifies the expanded form of abbreviations."),
    ("3.1.5", "Reading Level", "Supplemental content is available when text requires advanced reading ability."),
    ("3.1.6", "Pronunciation", "A mechanism identifies pronunciation where meaning is ambiguous without it."),
    ("3.2.5", "Change on Request", "Changes of context are initiated only by user request."),
    ("3.3.5", "Help", "Context-sensitive help is available."),
    ("3.3.6", "Error Prevention (All)", "All submissions are reversible, checked, or confirmed."),
    ("3.3.9", "Accessible Authentication (Enhanced)", "Authentication does not require any cognitive function test."),
];

#[rustfmt::skip]
const WCAG21_RESOURCES: &[ResourceRow] = &[
    ("1.1.1", "https://www.w3.org/WAI/tutorials/images/"),
    ("1.3.1", "https://www.w3.org/WAI/tutorials/page-structure/"),
    ("1.4.3", "https://webaim.org/resources/contrastchecker/"),
    ("1.4.11", "https://webaim.org/resources/contrastchecker/"),
    ("2.1.1", "https://webaim.org/techniques/keyboard/"),
    ("2.4.1", "https://webaim.org/techniques/skipnav/"),
    ("3.3.1", "https://www.w3.org/WAI/tutorials/forms/notifications/"),
    ("4.1.1", "https://validator.w3.org/"),
    ("4.1.2", "https://www.w3.org/WAI/ARIA/apg/"),
];

#[rustfmt::skip]
const WCAG22_RESOURCES: &[ResourceRow] = &[
    ("1.1.1", "https://www.w3.org/WAI/tutorials/images/"),
    ("1.3.1", "https://www.w3.org/WAI/tutorials/page-structure/"),
    ("1.4.3", "https://webaim.org/resources/contrastchecker/"),
    ("1.4.11", "https://webaim.org/resources/contrastchecker/"),
    ("2.1.1", "https://webaim.org/techniques/keyboard/"),
    ("2.4.1", "https://webaim.org/techniques/skipnav/"),
    ("2.4.11", "https://www.w3.org/WAI/WCAG22/Understanding/focus-not-obscured-minimum"),
    ("2.5.8", "https://www.w3.org/WAI/WCAG22/Understanding/target-size-minimum"),
    ("3.3.1", "https://www.w3.org/WAI/tutorials/forms/notifications/"),
    ("3.3.8", "https://www.w3.org/WAI/WCAG22/Understanding/accessible-authentication-minimum"),
    ("4.1.2", "https://www.w3.org/WAI/ARIA/apg/"),
];
