mod test_assignment;
mod test_chain;
mod test_classify;
mod test_registry;
mod test_resolve;
