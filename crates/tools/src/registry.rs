use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use brewchat_core::{Error, Result};

use super::Tool;

/// Registry that holds all available tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry
    pub fn new() -> Self {
        Self { tools: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Registers a new tool in the registry
    ///
    /// Returns error if a tool with the same name already exists
    pub fn register<T: Tool + 'static>(&self, tool: T) -> Result<()> {
        let name = tool.name().to_string();
        let mut tools = self.tools.write().unwrap();

        if tools.contains_key(&name) {
            return Err(Error::Tool(format!("tool '{}' already registered", name)));
        }

        tools.insert(name, Arc::new(tool));
        Ok(())
    }

    /// Gets a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap();
        tools.get(name).cloned()
    }

    /// Checks if a tool exists
    pub fn has(&self, name: &str) -> bool {
        let tools = self.tools.read().unwrap();
        tools.contains_key(name)
    }

    /// Returns names of all registered tools
    pub fn list(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap();
        tools.keys().cloned().collect()
    }

    /// Returns the number of registered tools
    pub fn count(&self) -> usize {
        let tools = self.tools.read().unwrap();
        tools.len()
    }

    /// Executes a tool by name with the given query
    pub fn run(&self, tool_name: &str, query: &str) -> Result<String> {
        match self.get(tool_name) {
            Some(tool) => Ok(tool.run(query)),
            None => Err(Error::Tool(format!("tool '{}' not found in registry", tool_name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes back the provided query. Useful for testing."
        }

        fn run(&self, query: &str) -> String {
            query.to_string()
        }
    }

    #[test]
    fn test_new_registry() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_tool() {
        let registry = ToolRegistry::new();

        registry.register(EchoTool).unwrap();
        assert_eq!(registry.count(), 1);
        assert!(registry.has("echo"));
        assert_eq!(registry.get("echo").unwrap().description(), EchoTool.description());
    }

    #[test]
    fn test_duplicate_tool() {
        let registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();

        let result = registry.register(EchoTool);
        assert!(result.is_err());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_run_tool() {
        let registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();

        let reply = registry.run("echo", "hello").unwrap();
        assert_eq!(reply, "hello");
    }

    #[test]
    fn test_run_missing_tool() {
        let registry = ToolRegistry::new();
        assert!(registry.run("missing", "hello").is_err());
    }
}
