//! # Help Text
//!
//! Help message for the interactive session.
//! Displayed to the user via the `.help` command.

pub const MAIN: &str = concat!(
    "**🏗 BuildWise Help**\n",
    "Use: .command _args_\n",
    "\n",
    "**📋 Project**\n",
    "* new: Fill in the project details step by step\n",
    "* set [field] [value]: Change one field\n",
    "* show: Show the current project\n",
    "* cancel: Abort the wizard\n",
    "\n",
    "**🤖 AI**\n",
    "* plan: Generate the full plan\n",
    "* cost: Estimate cost\n",
    "* schedule: Generate schedule\n",
    "* resources: Plan resources\n",
    "* ask [question]: Ask a construction question\n",
    "\n",
    "**⚡ Misc**\n",
    "* key [api key]: Set the API key for this session\n",
    "* help\n",
    "* quit\n"
);
