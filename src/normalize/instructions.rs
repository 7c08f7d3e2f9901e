use serde::Deserialize;
use serde_json::Value;

/// `recipeInstructions` as published: one free-text block or a list of
/// steps and sections.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InstructionsField {
    Text(String),
    List(Vec<InstructionNode>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InstructionNode {
    Text(String),
    HowTo(HowToNode),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type")]
pub enum HowToNode {
    HowToStep {
        text: Option<String>,
        name: Option<String>,
    },
    HowToSection {
        #[serde(rename = "itemListElement")]
        item_list_element: Vec<InstructionNode>,
    },
}

/// Flatten an instruction tree into an ordered list of step descriptions.
///
/// Sections inline their child steps in place, so a page that groups its
/// directions still reads top to bottom. Unrecognized node shapes
/// contribute nothing.
pub fn flatten_instructions(field: Option<InstructionsField>) -> Vec<String> {
    match field {
        Some(InstructionsField::Text(block)) => vec![block],
        Some(InstructionsField::List(nodes)) => flatten_nodes(nodes),
        Some(InstructionsField::Other(_)) | None => Vec::new(),
    }
}

fn flatten_nodes(nodes: Vec<InstructionNode>) -> Vec<String> {
    let mut steps = Vec::new();
    for node in nodes {
        match node {
            InstructionNode::Text(step) => steps.push(step),
            InstructionNode::HowTo(HowToNode::HowToStep { text, name }) => {
                let step = text
                    .filter(|text| !text.is_empty())
                    .or(name.filter(|name| !name.is_empty()))
                    .unwrap_or_default();
                steps.push(step);
            }
            InstructionNode::HowTo(HowToNode::HowToSection { item_list_element }) => {
                steps.extend(flatten_nodes(item_list_element));
            }
            InstructionNode::Other(_) => {}
        }
    }
    steps
}
