mod test_requests;
